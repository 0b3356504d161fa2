// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;
use std::sync::Arc;

use fwdetect::catalog::ModelCatalog;
use fwdetect::detector::{Confidence, ModelDetector};
use fwdetect::hardware::StaticHardware;
use proptest::prelude::*;

fn catalog() -> Arc<ModelCatalog> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/models.json");
    Arc::new(ModelCatalog::load(&path).unwrap())
}

fn detect(cpu: &str, gpus: &[&str]) -> Option<String> {
    let hw = StaticHardware::new(cpu, gpus.iter().map(|g| g.to_string()).collect());
    ModelDetector::new(catalog(), hw)
        .detect_model()
        .map(|model| model.id)
}

#[test]
fn test_discrete_amd_with_dgpu() {
    assert_eq!(
        detect(
            "AMD Ryzen 7 7840HS with Radeon Graphics",
            &["AMD Radeon(TM) RX 7700S"]
        ),
        Some("16_AMD".to_string())
    );
}

#[test]
fn test_discrete_amd_with_both_adapters() {
    // Adapter order must not matter
    for gpus in [
        ["AMD Radeon(TM) 780M", "AMD Radeon(TM) RX 7700S"],
        ["AMD Radeon(TM) RX 7700S", "AMD Radeon(TM) 780M"],
    ] {
        assert_eq!(
            detect("AMD Ryzen 9 7940HS w/ Radeon 780M Graphics", &gpus),
            Some("16_AMD".to_string())
        );
    }
}

#[test]
fn test_discrete_amd_cpu_without_dgpu_is_unknown() {
    assert_eq!(
        detect(
            "AMD Ryzen 7 7840HS with Radeon Graphics",
            &["AMD Radeon(TM) 780M"]
        ),
        None
    );
}

#[test]
fn test_integrated_amd() {
    assert_eq!(
        detect("AMD Ryzen 5 7640U", &["AMD Radeon 760M"]),
        Some("13_AMD".to_string())
    );
    assert_eq!(
        detect("AMD Ryzen 7 7840U w/ Radeon 780M Graphics", &["AMD Radeon(TM) 780M Graphics"]),
        Some("13_AMD".to_string())
    );
}

#[test]
fn test_integrated_amd_from_lspci_names() {
    let igpu = "Advanced Micro Devices, Inc. [AMD/ATI] Phoenix1";
    assert_eq!(
        detect("AMD Ryzen 5 7640U w/ Radeon 760M Graphics", &[igpu]),
        Some("13_AMD".to_string())
    );

    let dgpu = "Advanced Micro Devices, Inc. [AMD/ATI] Navi 33 [Radeon RX 7700S/7600/7600S/7600M XT/PRO W7600]";
    assert_eq!(
        detect("AMD Ryzen 7 7840HS w/ Radeon 780M Graphics", &[dgpu, igpu]),
        Some("16_AMD".to_string())
    );
}

#[test]
fn test_integrated_amd_with_dgpu_is_unknown() {
    assert_eq!(
        detect(
            "AMD Ryzen 5 7640U",
            &["AMD Radeon 760M", "AMD Radeon(TM) RX 7700S"]
        ),
        None
    );
}

#[test]
fn test_integrated_amd_without_igpu_is_unknown() {
    assert_eq!(detect("AMD Ryzen 5 7640U", &[]), None);
}

#[test]
fn test_intel_needs_no_gpu_corroboration() {
    for gpus in [&[][..], &["Intel(R) Iris(R) Xe Graphics"][..], &["AMD Radeon(TM) RX 7700S"][..]] {
        assert_eq!(
            detect("13th Gen Intel Core i7-1365U", gpus),
            Some("13_INTEL".to_string())
        );
    }
}

#[test]
fn test_unparseable_processor_is_unknown() {
    assert_eq!(detect("", &[]), None);
    assert_eq!(detect("\u{0}\u{1}garbage", &[]), None);
    assert_eq!(detect("Apple M2 Pro", &["Apple M2 Pro"]), None);
}

#[test]
fn test_fallback_tokens_without_cpu_patterns() {
    let mut document: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/models.json"),
        )
        .unwrap(),
    )
    .unwrap();
    document["patterns"]["cpu"] = serde_json::json!({});
    let catalog = Arc::new(ModelCatalog::from_json_str(&document.to_string()).unwrap());

    let detector = ModelDetector::new(
        catalog.clone(),
        StaticHardware::new("AMD Ryzen 7 7840HS", vec![]),
    );
    let descriptors = detector.descriptors().unwrap();
    let classification = detector.classify(&descriptors);
    assert_eq!(
        classification.matched.map(|m| m.confidence),
        Some(Confidence::Fallback)
    );
    assert_eq!(detector.detect_model().unwrap().id, "16_AMD");

    let detector = ModelDetector::new(catalog, StaticHardware::new("AMD Ryzen 5 7640U", vec![]));
    assert_eq!(detector.detect_model().unwrap().id, "13_AMD");
}

#[test]
fn test_model_by_id_overrides() {
    let detector = ModelDetector::new(catalog(), StaticHardware::default());
    let model = detector.model_by_id("16_AMD").unwrap();
    assert_eq!(model.name, "Framework 16 AMD");
    assert!(detector.model_by_id("nonexistent").is_none());
    assert!(detector
        .model_from_override(&serde_json::json!(42))
        .is_none());
}

#[test]
fn test_catalog_shared_across_threads() {
    let catalog = catalog();
    let handles: Vec<_> = ["AMD Ryzen 5 7640U", "13th Gen Intel Core i5-1340P"]
        .into_iter()
        .map(|cpu| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                let hw = StaticHardware::new(cpu, vec!["AMD Radeon 760M".to_string()]);
                ModelDetector::new(catalog, hw).detect_model().map(|m| m.id)
            })
        })
        .collect();

    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        ids,
        vec![Some("13_AMD".to_string()), Some("13_INTEL".to_string())]
    );
}

proptest! {
    #[test]
    fn prop_detection_never_panics(cpu in ".{0,64}", gpus in proptest::collection::vec(".{0,32}", 0..4)) {
        let catalog = catalog();
        let hw = StaticHardware::new(cpu, gpus);
        let result = ModelDetector::new(catalog.clone(), hw).detect_model();
        if let Some(model) = result {
            prop_assert!(catalog.get(&model.id).is_some());
        }
    }

    #[test]
    fn prop_detection_is_idempotent(cpu in "(AMD Ryzen [579] 7[6-9]40(HS|U)|13th Gen Intel Core i7-13[0-9]{2}U)") {
        let hw = StaticHardware::new(cpu, vec!["AMD Radeon(TM) RX 7700S".to_string()]);
        let detector = ModelDetector::new(catalog(), hw);
        prop_assert_eq!(detector.detect_model(), detector.detect_model());
    }
}
