// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model detection against the live hardware provider

use std::sync::Arc;

use crate::catalog::{ModelCatalog, ModelClass, ModelRecord};
use crate::error::{FwError, Result};
use crate::hardware::HardwareProvider;

use super::rules::{classify, Classification};

/// Raw descriptors gathered from the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptors {
    pub processor: String,
    pub adapters: Vec<String>,
}

/// Resolves the running laptop model
pub struct ModelDetector<P> {
    catalog: Arc<ModelCatalog>,
    provider: P,
}

impl<P: HardwareProvider> ModelDetector<P> {
    pub fn new(catalog: Arc<ModelCatalog>, provider: P) -> Self {
        Self { catalog, provider }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Query the provider for the processor and graphics adapters
    pub fn descriptors(&self) -> Result<Descriptors> {
        let processor = self.provider.processor()?;
        let adapters = self.provider.graphics_adapters()?;
        Ok(Descriptors {
            processor,
            adapters,
        })
    }

    /// Classify the current hardware without resolving a record
    pub fn classify(&self, descriptors: &Descriptors) -> Classification {
        classify(
            self.catalog.compiled(),
            &descriptors.processor,
            &descriptors.adapters,
        )
    }

    /// Detect the running model
    ///
    /// Returns `None` when the hardware cannot be queried or does not match
    /// any known model. Each call queries the provider again.
    pub fn detect_model(&self) -> Option<ModelRecord> {
        let descriptors = match self.descriptors() {
            Ok(descriptors) => descriptors,
            Err(e) => {
                tracing::warn!("Could not query hardware, model unknown: {}", e);
                return None;
            }
        };

        if descriptors.processor.trim().is_empty() {
            tracing::warn!("Processor descriptor is empty, model unknown");
            return None;
        }

        match self.classify(&descriptors).class() {
            Some(class) => self.record_for(class),
            None => {
                tracing::warn!(
                    "No model matched processor '{}' with adapters {:?}",
                    descriptors.processor,
                    descriptors.adapters
                );
                None
            }
        }
    }

    fn record_for(&self, class: ModelClass) -> Option<ModelRecord> {
        let record = self.catalog.get(class.id()).cloned();
        if record.is_none() {
            tracing::warn!("Detected {} but the catalog has no such model", class);
        }
        record
    }

    /// Look up a model by identifier, for manual overrides
    pub fn model_by_id(&self, id: &str) -> Option<ModelRecord> {
        let record = self.catalog.get(id).cloned();
        if record.is_none() {
            tracing::warn!("{}", FwError::InvalidOverrideIdentifier(id.to_string()));
        }
        record
    }

    /// Look up a model from an untrusted configuration value
    ///
    /// Anything other than a string naming a known model yields `None`.
    pub fn model_from_override(&self, value: &serde_json::Value) -> Option<ModelRecord> {
        match value {
            serde_json::Value::String(id) => self.model_by_id(id),
            other => {
                tracing::warn!(
                    "{}",
                    FwError::InvalidOverrideIdentifier(format!("expected a string, got {}", other))
                );
                None
            }
        }
    }

    /// Forced model when it resolves, detection otherwise
    pub fn resolve(&self, forced: Option<&serde_json::Value>) -> Option<ModelRecord> {
        if let Some(record) = forced.and_then(|value| self.model_from_override(value)) {
            tracing::info!("Using forced model {}", record.id);
            return Some(record);
        }
        self.detect_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{MockHardwareProvider, StaticHardware};

    const CATALOG: &str = include_str!("../../configs/models.json");

    fn catalog() -> Arc<ModelCatalog> {
        Arc::new(ModelCatalog::from_json_str(CATALOG).unwrap())
    }

    fn detector(cpu: &str, gpus: &[&str]) -> ModelDetector<StaticHardware> {
        ModelDetector::new(
            catalog(),
            StaticHardware::new(cpu, gpus.iter().map(|g| g.to_string()).collect()),
        )
    }

    #[test]
    fn test_detect_discrete_amd() {
        let model = detector(
            "AMD Ryzen 7 7840HS with Radeon Graphics",
            &["AMD Radeon(TM) RX 7700S"],
        )
        .detect_model()
        .unwrap();
        assert_eq!(model.id, "16_AMD");
        assert!(model.has_dgpu);
    }

    #[test]
    fn test_detect_discrete_cpu_without_dgpu() {
        let model = detector(
            "AMD Ryzen 7 7840HS with Radeon Graphics",
            &["AMD Radeon(TM) 780M"],
        )
        .detect_model();
        assert!(model.is_none());
    }

    #[test]
    fn test_detect_integrated_amd() {
        let model = detector("AMD Ryzen 5 7640U", &["AMD Radeon 760M"])
            .detect_model()
            .unwrap();
        assert_eq!(model.id, "13_AMD");
        assert!(!model.has_dgpu);
    }

    #[test]
    fn test_detect_intel_ignores_adapters() {
        for gpus in [&[][..], &["Intel(R) Iris(R) Xe Graphics"][..]] {
            let model = detector("13th Gen Intel Core i7-1365U", gpus)
                .detect_model()
                .unwrap();
            assert_eq!(model.id, "13_INTEL");
        }
    }

    #[test]
    fn test_detect_empty_processor() {
        assert!(detector("", &[]).detect_model().is_none());
        assert!(detector("   ", &[]).detect_model().is_none());
    }

    #[test]
    fn test_provider_failure_degrades_to_unknown() {
        let mut provider = MockHardwareProvider::new();
        provider
            .expect_processor()
            .returning(|| Err(FwError::HardwareQueryFailed("WMI unavailable".into())));
        provider.expect_graphics_adapters().never();

        let detector = ModelDetector::new(catalog(), provider);
        assert!(detector.detect_model().is_none());
    }

    #[test]
    fn test_adapter_failure_degrades_to_unknown() {
        let mut provider = MockHardwareProvider::new();
        provider
            .expect_processor()
            .returning(|| Ok("13th Gen Intel Core i7-1365U".to_string()));
        provider
            .expect_graphics_adapters()
            .returning(|| Err(FwError::HardwareQueryFailed("lspci missing".into())));

        let detector = ModelDetector::new(catalog(), provider);
        assert!(detector.detect_model().is_none());
    }

    #[test]
    fn test_each_call_queries_hardware() {
        let mut provider = MockHardwareProvider::new();
        provider
            .expect_processor()
            .times(2)
            .returning(|| Ok("AMD Ryzen 5 7640U".to_string()));
        provider
            .expect_graphics_adapters()
            .times(2)
            .returning(|| Ok(vec!["AMD Radeon 760M".to_string()]));

        let detector = ModelDetector::new(catalog(), provider);
        assert_eq!(detector.detect_model(), detector.detect_model());
    }

    #[test]
    fn test_detected_class_missing_from_catalog() {
        let mut json: serde_json::Value = serde_json::from_str(CATALOG).unwrap();
        json["models"].as_object_mut().unwrap().remove("13_INTEL");
        let catalog = Arc::new(ModelCatalog::from_json_str(&json.to_string()).unwrap());

        let detector = ModelDetector::new(
            catalog,
            StaticHardware::new("13th Gen Intel Core i7-1365U", vec![]),
        );
        assert!(detector.detect_model().is_none());
    }

    #[test]
    fn test_model_by_id() {
        let detector = detector("", &[]);
        assert_eq!(detector.model_by_id("16_AMD").unwrap().id, "16_AMD");
        assert!(detector.model_by_id("nonexistent").is_none());
        assert!(detector.model_by_id("16_amd").is_none());
    }

    #[test]
    fn test_model_from_override_rejects_non_strings() {
        let detector = detector("", &[]);
        assert!(detector.model_from_override(&serde_json::json!(42)).is_none());
        assert!(detector.model_from_override(&serde_json::json!(null)).is_none());
        assert!(detector
            .model_from_override(&serde_json::json!(["16_AMD"]))
            .is_none());
        assert_eq!(
            detector
                .model_from_override(&serde_json::json!("13_AMD"))
                .unwrap()
                .id,
            "13_AMD"
        );
    }

    #[test]
    fn test_resolve_prefers_valid_override() {
        let detector = detector("AMD Ryzen 5 7640U", &["AMD Radeon 760M"]);
        let forced = serde_json::json!("16_AMD");
        assert_eq!(detector.resolve(Some(&forced)).unwrap().id, "16_AMD");
    }

    #[test]
    fn test_resolve_falls_back_to_detection() {
        let detector = detector("AMD Ryzen 5 7640U", &["AMD Radeon 760M"]);
        let forced = serde_json::json!(42);
        assert_eq!(detector.resolve(Some(&forced)).unwrap().id, "13_AMD");
        assert_eq!(detector.resolve(None).unwrap().id, "13_AMD");
    }
}
