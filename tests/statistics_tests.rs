/// Tests for the collection operations: temperature ranking and aggregate
/// statistics, driven through the in-memory lead repository
use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use lead_triage::{
    aggregate_statistics, rank_by_temperature, Department, InMemoryLeadRepository, Lead,
    LeadRepository,
};
use uuid::Uuid;

/// A lead with the given attribute texts; unset fields stay absent.
fn make_lead(
    name: &str,
    niche: Option<&str>,
    size: Option<&str>,
    volume: Option<&str>,
    role: Option<&str>,
    deadline: Option<&str>,
    budget: Option<&str>,
) -> Lead {
    Lead {
        id: Uuid::new_v4(),
        name: Some(name.to_string()),
        contact: None,
        business_niche: niche.map(String::from),
        company_size: size.map(String::from),
        task_volume: volume.map(String::from),
        role: role.map(String::from),
        deadline: deadline.map(String::from),
        budget: budget.map(String::from),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    #[test]
    fn test_ranking_is_descending_and_stable() {
        // Scores: 10, 90, 90, 40
        let leads = vec![
            make_lead("ten", None, Some("medium"), None, None, None, None),
            make_lead(
                "ninety-a",
                Some("fintech"),
                Some("enterprise"),
                Some("enterprise"),
                Some("CEO"),
                Some("urgent"),
                None,
            ),
            make_lead(
                "ninety-b",
                Some("fintech"),
                Some("enterprise"),
                Some("enterprise"),
                Some("CEO"),
                Some("urgent"),
                None,
            ),
            make_lead("forty", Some("fintech"), None, None, Some("CEO"), None, None),
        ];

        let ranked = rank_by_temperature(leads);
        let names: Vec<_> = ranked
            .into_iter()
            .map(|lead| lead.name.unwrap())
            .collect();
        assert_eq!(names, ["ninety-a", "ninety-b", "forty", "ten"]);
    }

    #[test]
    fn test_unscorable_lead_ranks_last() {
        let leads = vec![
            make_lead("broken", None, None, None, None, None, Some("10k-ish")),
            make_lead("scored", None, Some("small"), None, None, None, None),
        ];

        let ranked = rank_by_temperature(leads);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name.as_deref(), Some("scored"));
        assert_eq!(ranked[1].name.as_deref(), Some("broken"));
    }

    #[test]
    fn test_ranking_empty_collection() {
        assert!(rank_by_temperature(Vec::new()).is_empty());
    }
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_counts_and_budget_sums_per_tier() {
        let leads = vec![
            // 97 points, hot, VIP (budget rule)
            make_lead(
                "hot",
                Some("финтех"),
                Some("enterprise"),
                Some("large"),
                Some("CEO"),
                Some("urgent"),
                Some("2500000.00"),
            ),
            // 21 points, cold, general
            make_lead(
                "cold",
                Some("стартап"),
                Some("startup"),
                Some("small"),
                Some("Маркетолог"),
                Some("flexible"),
                Some("50000.00"),
            ),
            // 20 + 15 + 10 = 45 points, medium, technical
            make_lead(
                "medium",
                Some("edtech"),
                Some("large"),
                None,
                Some("manager"),
                None,
                None,
            ),
        ];

        let stats = aggregate_statistics(&leads);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.by_temperature.hot, 1);
        assert_eq!(stats.by_temperature.medium, 1);
        assert_eq!(stats.by_temperature.cold, 1);

        assert_eq!(stats.by_department.get(&Department::Vip), Some(&1));
        assert_eq!(stats.by_department.get(&Department::Technical), Some(&1));
        assert_eq!(stats.by_department.get(&Department::General), Some(&1));
        assert_eq!(stats.by_department.get(&Department::Specialized), None);

        assert_eq!(
            stats.total_budget,
            BigDecimal::from_str("2550000.00").unwrap()
        );
        assert_eq!(
            stats.budgets_by_temperature.hot,
            BigDecimal::from_str("2500000.00").unwrap()
        );
        assert_eq!(
            stats.budgets_by_temperature.cold,
            BigDecimal::from_str("50000.00").unwrap()
        );
        assert_eq!(stats.budgets_by_temperature.medium, BigDecimal::zero());
        assert_eq!(
            stats.average_budget,
            BigDecimal::from_str("850000.00").unwrap()
        );
    }

    #[test]
    fn test_empty_collection_has_zero_average() {
        let stats = aggregate_statistics(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_budget, BigDecimal::zero());
    }

    #[test]
    fn test_skipped_leads_are_excluded_from_every_count() {
        let leads = vec![
            make_lead("ok", None, Some("large"), None, None, None, Some("100000")),
            make_lead("broken", Some("fintech"), None, None, None, None, Some("€100k")),
        ];

        let stats = aggregate_statistics(&leads);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.skipped, 1);
        // The broken lead's niche must not leak into the department counts
        assert_eq!(stats.by_department.get(&Department::Technical), None);
        assert_eq!(stats.total_budget, BigDecimal::from(100_000u32));
        assert_eq!(stats.average_budget, BigDecimal::from(100_000u32));
    }
}

#[cfg(test)]
mod repository_tests {
    use super::*;

    #[test]
    fn test_rank_and_aggregate_over_repository_listing() {
        let repo = InMemoryLeadRepository::new();
        repo.store(make_lead(
            "low",
            None,
            Some("small"),
            None,
            None,
            None,
            None,
        ))
        .unwrap();
        repo.store(make_lead(
            "high",
            Some("healthcare"),
            Some("large"),
            Some("large"),
            Some("founder"),
            Some("asap"),
            Some("300000"),
        ))
        .unwrap();

        let ranked = rank_by_temperature(repo.list().unwrap());
        assert_eq!(ranked[0].name.as_deref(), Some("high"));
        assert_eq!(ranked[1].name.as_deref(), Some("low"));

        let stats = aggregate_statistics(&repo.list().unwrap());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_temperature.hot, 1);
        assert_eq!(stats.by_temperature.cold, 1);
        assert_eq!(stats.by_department.get(&Department::Specialized), Some(&1));
        assert_eq!(stats.by_department.get(&Department::General), Some(&1));
    }
}
