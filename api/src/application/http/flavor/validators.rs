use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Most ingredients a mix may hold.
pub const MAX_SELECTION: u64 = 5;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SelectionValidator {
    #[serde(default)]
    #[validate(length(max = MAX_SELECTION, message = "a selection holds at most 5 ingredients"))]
    pub selected_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScorePairValidator {
    #[validate(length(min = 1, message = "selected_id is required"))]
    pub selected_id: String,

    #[validate(length(min = 1, message = "candidate_id is required"))]
    pub candidate_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_limit() {
        let ids = |n: u64| (0..n).map(|i| i.to_string()).collect::<Vec<_>>();
        assert!(SelectionValidator { selected_ids: ids(MAX_SELECTION) }.validate().is_ok());
        assert!(
            SelectionValidator { selected_ids: ids(MAX_SELECTION + 1) }
                .validate()
                .is_err()
        );
        assert!(SelectionValidator { selected_ids: vec![] }.validate().is_ok());
    }
}
