use crate::config::{Config, ConfigError, FeatureConfig};
use crate::orbit::geometry::{self, Point};
use crate::orbit::{PRIMARY_RADIUS, SECONDARY_RADIUS};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct FeatureId(String);

crate::impl_string_newtype!(FeatureId);

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct ColorToken(String);

crate::impl_string_newtype!(ColorToken);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum RingKind {
    #[strum(serialize = "Primary", serialize = "p", serialize = "outer")]
    Primary,
    #[strum(serialize = "Secondary", serialize = "s", serialize = "inner")]
    Secondary,
}

impl RingKind {
    pub fn base_radius(&self) -> f64 {
        match self {
            Self::Primary => PRIMARY_RADIUS,
            Self::Secondary => SECONDARY_RADIUS,
        }
    }
}

/// Live/attention state attached to a feature. Only refreshed by external
/// data collaborators; the engine passes it through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub active: bool,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct FeatureDescriptor {
    pub id: FeatureId,
    pub title: String,
    pub short_label: String,
    pub description: String,
    pub angle_degrees: f64,
    pub base_radius: f64,
    pub color: ColorToken,
    pub status: FeatureStatus,
}

impl FeatureDescriptor {
    pub fn from_config(ring: RingKind, cfg: &FeatureConfig) -> Self {
        let title = cfg.title.clone().unwrap_or_else(|| cfg.id.to_string());
        Self {
            id: cfg.id.clone(),
            short_label: cfg.short_label.clone().unwrap_or_else(|| title.clone()),
            title,
            description: cfg.description.clone().unwrap_or_default(),
            angle_degrees: cfg.angle,
            base_radius: ring.base_radius(),
            color: cfg.color.clone().unwrap_or_default(),
            status: FeatureStatus {
                active: cfg.active,
                summary: cfg.summary.clone().unwrap_or_default(),
            },
        }
    }
}

/// Where a feature lands relative to the pivot for one layout pass.
#[derive(Debug, Clone)]
pub struct FeaturePlacement {
    pub id: FeatureId,
    pub ring: RingKind,
    pub offset: Point,
}

/// The two fixed rings of feature shortcuts. Built once from configuration
/// and replaced wholesale on reload; user interaction never mutates it.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    primary: Vec<FeatureDescriptor>,
    secondary: Vec<FeatureDescriptor>,
}

impl FeatureRegistry {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut registry = Self::default();

        let configured = config
            .features
            .iter()
            .filter_map(|cfg| cfg.ring.map(|ring| (ring, cfg)));

        for (ring, cfg) in configured {
            let descriptor = FeatureDescriptor::from_config(ring, cfg);
            match ring {
                RingKind::Primary => registry.primary.push(descriptor),
                RingKind::Secondary => registry.secondary.push(descriptor),
            }
        }

        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let rings = [
            (RingKind::Primary, &self.primary),
            (RingKind::Secondary, &self.secondary),
        ];
        for (ring, features) in rings {
            for (i, feature) in features.iter().enumerate() {
                for earlier in &features[..i] {
                    if earlier.id == feature.id {
                        return Err(ConfigError::DuplicateId {
                            ring,
                            id: feature.id.clone(),
                        });
                    }
                    if earlier.angle_degrees == feature.angle_degrees {
                        return Err(ConfigError::DuplicateAngle {
                            ring,
                            angle: feature.angle_degrees,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn primary(&self) -> &[FeatureDescriptor] {
        &self.primary
    }

    pub fn secondary(&self) -> &[FeatureDescriptor] {
        &self.secondary
    }

    /// Looks an id up across both rings.
    pub fn find(&self, id: &FeatureId) -> Option<&FeatureDescriptor> {
        self.primary
            .iter()
            .chain(&self.secondary)
            .find(|f| &f.id == id)
    }

    /// One layout pass: every descriptor mapped through the geometry engine
    /// at the sampled viewport width.
    pub fn placements(&self, viewport_width: f64) -> Vec<FeaturePlacement> {
        let rings = [
            (RingKind::Primary, &self.primary),
            (RingKind::Secondary, &self.secondary),
        ];
        rings
            .into_iter()
            .flat_map(|(ring, features)| {
                features.iter().map(move |f| FeaturePlacement {
                    id: f.id.clone(),
                    ring,
                    offset: geometry::position(f.angle_degrees, f.base_radius, viewport_width),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn test_registry() -> FeatureRegistry {
        FeatureRegistry::from_config(&config::default_config()).unwrap()
    }

    #[test]
    fn test_find_scans_both_rings() {
        let registry = test_registry();
        assert!(registry.find(&FeatureId::new("audio")).is_some());
        assert!(registry.find(&FeatureId::new("settings")).is_some());
        assert!(registry.find(&FeatureId::new("warp-drive")).is_none());
    }

    #[test]
    fn test_ring_radii_from_kind() {
        let registry = test_registry();
        assert!(registry.primary().iter().all(|f| f.base_radius == 120.0));
        assert!(registry.secondary().iter().all(|f| f.base_radius == 80.0));
    }

    #[test]
    fn test_placements_cover_every_feature() {
        let registry = test_registry();
        let placements = registry.placements(1024.0);
        assert_eq!(
            placements.len(),
            registry.primary().len() + registry.secondary().len()
        );
        // every placement sits on its ring's unscaled radius at this width
        for p in &placements {
            let r = (p.offset.x.powi(2) + p.offset.y.powi(2)).sqrt();
            assert!((r - p.ring.base_radius()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut cfg = config::default_config();
        let mut dup = cfg.features[0].clone();
        dup.angle = 33.0;
        cfg.features.push(dup);
        assert!(matches!(
            FeatureRegistry::from_config(&cfg),
            Err(ConfigError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_duplicate_angle_rejected() {
        let mut cfg = config::default_config();
        let mut dup = cfg.features[0].clone();
        dup.id = FeatureId::new("something-else");
        cfg.features.push(dup);
        assert!(matches!(
            FeatureRegistry::from_config(&cfg),
            Err(ConfigError::DuplicateAngle { .. })
        ));
    }

    #[test]
    fn test_ringless_entries_skipped() {
        let mut cfg = config::default_config();
        cfg.features[0].ring = None;
        let registry = FeatureRegistry::from_config(&cfg).unwrap();
        assert!(registry.find(&cfg.features[0].id).is_none());
    }
}
