use std::path::Path;

use crate::models::Investor;
use crate::services::data::{read_json, DataError};
use crate::services::seed;

/// Read-only investor table
///
/// Built once at startup and shared behind an `Arc`; there is no mutation API.
#[derive(Debug, Clone)]
pub struct InvestorStore {
    investors: Vec<Investor>,
}

impl InvestorStore {
    /// Build a store, rejecting records that cannot be scored
    pub fn new(investors: Vec<Investor>) -> Result<Self, DataError> {
        for investor in &investors {
            validate_record(investor)?;
        }
        Ok(Self { investors })
    }

    /// Built-in sample investor table
    pub fn seeded() -> Self {
        Self { investors: seed::investors() }
    }

    /// Load investors from a JSON array file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        Self::new(read_json(path)?)
    }

    pub fn all(&self) -> &[Investor] {
        &self.investors
    }

    pub fn len(&self) -> usize {
        self.investors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investors.is_empty()
    }

    /// Exact id lookup
    pub fn get(&self, id: &str) -> Option<&Investor> {
        self.investors.iter().find(|i| i.id == id)
    }

    /// Case-insensitive substring search over name and firm
    pub fn search(&self, query: &str) -> Vec<&Investor> {
        let query = query.to_lowercase();
        self.investors
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&query) || i.firm.to_lowercase().contains(&query))
            .collect()
    }
}

/// An investor needs a valid range plus at least one focus and one stage
fn validate_record(investor: &Investor) -> Result<(), DataError> {
    if !investor.investment_range.is_valid() {
        return Err(DataError::InvalidRecord(format!(
            "investor {} has invalid investment range {}..{}",
            investor.id, investor.investment_range.min, investor.investment_range.max
        )));
    }
    if investor.focus.is_empty() {
        return Err(DataError::InvalidRecord(format!("investor {} has no focus areas", investor.id)));
    }
    if investor.stages.is_empty() {
        return Err(DataError::InvalidRecord(format!("investor {} has no funding stages", investor.id)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundingStage, InvestmentRange};

    #[test]
    fn test_seeded_store() {
        let store = InvestorStore::seeded();
        assert_eq!(store.len(), 15);
        assert_eq!(store.get("1").map(|i| i.name.as_str()), Some("Sarah Chen"));
        assert!(store.get("99").is_none());
    }

    #[test]
    fn test_search_name_and_firm() {
        let store = InvestorStore::seeded();

        let by_firm: Vec<&str> = store.search("sequoia").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(by_firm, vec!["2"]);

        let by_name = store.search("PATEL");
        assert_eq!(by_name.len(), 2);

        assert!(store.search("nobody at all").is_empty());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut investor = seed::investors().remove(0);
        investor.investment_range = InvestmentRange { min: 10.0, max: 1.0 };
        investor.stages = vec![FundingStage::Seed];

        let err = InvestorStore::new(vec![investor]).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord(_)));
    }

    #[test]
    fn test_rejects_missing_focus_or_stages() {
        let mut no_focus = seed::investors().remove(0);
        no_focus.focus.clear();
        let err = InvestorStore::new(vec![no_focus]).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord(ref m) if m.contains("focus")));

        let mut no_stages = seed::investors().remove(1);
        no_stages.stages.clear();
        let err = InvestorStore::new(vec![no_stages]).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord(ref m) if m.contains("stages")));
    }

    #[test]
    fn test_from_json_file_rejects_empty_stages() {
        let path = std::env::temp_dir().join(format!("deepflow-empty-stages-{}.json", std::process::id()));
        let mut investors = seed::investors();
        investors.truncate(1);
        investors[0].stages.clear();
        std::fs::write(&path, serde_json::to_string(&investors).unwrap()).unwrap();

        let result = InvestorStore::from_json_file(&path);
        assert!(matches!(result, Err(DataError::InvalidRecord(_))));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("deepflow-investors-{}.json", std::process::id()));
        let json = serde_json::to_string(&seed::investors()[..2]).unwrap();
        std::fs::write(&path, json).unwrap();

        let store = InvestorStore::from_json_file(&path).unwrap();
        assert_eq!(store.len(), 2);

        std::fs::remove_file(&path).ok();
    }
}
