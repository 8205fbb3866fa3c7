use models::product;

/// Case-insensitive substring filters over the categorical product
/// attributes. Absent fields are no-ops; present fields are AND-combined.
#[derive(Clone, Debug, Default)]
pub struct FacetFilter {
    pub mounting_type: Option<String>,
    pub light_distribution: Option<String>,
    pub lamp_type: Option<String>,
    pub ip_rating: Option<String>,
}

impl FacetFilter {
    pub fn is_active(&self) -> bool {
        self.mounting_type.is_some()
            || self.light_distribution.is_some()
            || self.lamp_type.is_some()
            || self.ip_rating.is_some()
    }

    /// Column/pattern pairs for the filters that are present.
    pub(crate) fn predicates(&self) -> Vec<(product::Column, String)> {
        let mut preds = Vec::new();
        if let Some(v) = &self.mounting_type {
            preds.push((product::Column::MountingType, wildcard(v)));
        }
        if let Some(v) = &self.light_distribution {
            preds.push((product::Column::LightDistribution, wildcard(v)));
        }
        if let Some(v) = &self.lamp_type {
            preds.push((product::Column::LampType, wildcard(v)));
        }
        if let Some(v) = &self.ip_rating {
            preds.push((product::Column::IpRating, wildcard(v)));
        }
        preds
    }
}

pub(crate) fn wildcard(term: &str) -> String {
    format!("%{}%", term)
}
