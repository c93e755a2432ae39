use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub meter_id: String,
    pub plan_name: String,
}

impl AccountRecord {
    pub fn new(meter_id: impl Into<String>, plan_name: impl Into<String>) -> Self {
        Self {
            meter_id: meter_id.into(),
            plan_name: plan_name.into(),
        }
    }
}

/// Which plan each smart meter is currently contracted to.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: BTreeMap<String, String>,
}

impl AccountDirectory {
    /// A later record for the same meter replaces an earlier one.
    pub fn new(records: impl IntoIterator<Item = AccountRecord>) -> Self {
        let accounts = records
            .into_iter()
            .map(|r| (r.meter_id, r.plan_name))
            .collect();
        Self { accounts }
    }

    pub fn plan_for(&self, meter_id: &str) -> Option<&str> {
        self.accounts.get(meter_id).map(String::as_str)
    }

    pub fn meter_ids(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_meter_has_no_plan() {
        let directory = AccountDirectory::new([AccountRecord::new("smart-meter-0", "price-plan-0")]);

        assert_eq!(directory.plan_for("smart-meter-0"), Some("price-plan-0"));
        assert_eq!(directory.plan_for("unmapped-meter"), None);
    }

    #[test]
    fn later_record_overwrites_earlier() {
        let directory = AccountDirectory::new([
            AccountRecord::new("m1", "price-plan-0"),
            AccountRecord::new("m1", "price-plan-2"),
        ]);

        assert_eq!(directory.plan_for("m1"), Some("price-plan-2"));
        assert_eq!(directory.len(), 1);
    }
}
