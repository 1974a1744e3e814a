//! Integration tests for the SQLite repositories and port adapters

use chrono::Utc;
use rust_decimal_macros::dec;

use core_kernel::{HealthCheckable, Money, PortError};
use domain_customer::{CustomerPort, NationalId, NewCustomer};
use domain_mortgage::{LoanTerms, NewSimulation, PaymentSummary, SimulationPort};
use infra_db::repositories::{CustomerRepository, NewCustomerRow, NewSimulationRow, SimulationRepository};
use infra_db::{DatabaseError, SqlCustomerAdapter, SqlSimulationAdapter};
use test_utils::{CustomerFixtures, TestDatabase};

fn row(national_id: &str, email: &str) -> NewCustomerRow {
    NewCustomerRow {
        name: "Ana Garcia".to_string(),
        national_id: national_id.to_string(),
        email: email.to_string(),
        capital: "100000.50".to_string(),
    }
}

fn record(national_id: &str, email: &str) -> NewCustomer {
    NewCustomer {
        email: email.to_string(),
        ..CustomerFixtures::record(national_id)
    }
}

fn nid(value: &str) -> NationalId {
    NationalId::parse(value).unwrap()
}

// ============================================================================
// Customer repository
// ============================================================================

#[tokio::test]
async fn test_insert_and_find_customer() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());

    let inserted = repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();
    assert_eq!(inserted.id, 1);
    assert_eq!(inserted.capital, "100000.50");

    let found = repo.find_by_national_id("12345678Z").await.unwrap().unwrap();
    assert_eq!(found, inserted);

    let by_email = repo.find_by_email("ana@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, inserted.id);

    assert!(repo.find_by_national_id("87654321X").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_national_id_is_rejected() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());

    repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();
    let err = repo.insert(row("12345678Z", "other@example.com")).await.unwrap_err();

    assert!(matches!(err, DatabaseError::DuplicateEntry(_)));
    assert_eq!(db.row_count("customers").await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());

    repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();
    let err = repo.insert(row("87654321X", "ana@example.com")).await.unwrap_err();

    assert!(matches!(err, DatabaseError::DuplicateEntry(_)));
}

#[tokio::test]
async fn test_update_returns_row_under_new_national_id() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());
    let original = repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();

    let updated = repo
        .update_by_national_id("12345678Z", row("87654321X", "ana@example.com"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.national_id, "87654321X");
    assert!(repo.find_by_national_id("12345678Z").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());

    let result = repo
        .update_by_national_id("12345678Z", row("12345678Z", "ana@example.com"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_conflict_leaves_row_unchanged() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());
    repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();
    let luis = repo.insert(row("87654321X", "luis@example.com")).await.unwrap();

    let err = repo
        .update_by_national_id("87654321X", row("87654321X", "ana@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::DuplicateEntry(_)));

    let unchanged = repo.find_by_national_id("87654321X").await.unwrap().unwrap();
    assert_eq!(unchanged, luis);
}

#[tokio::test]
async fn test_update_into_taken_national_id_is_rejected() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());
    repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();
    let luis = repo.insert(row("87654321X", "luis@example.com")).await.unwrap();

    let err = repo
        .update_by_national_id("87654321X", row("12345678Z", "luis@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::DuplicateEntry(_)));

    let unchanged = repo.find_by_national_id("87654321X").await.unwrap().unwrap();
    assert_eq!(unchanged, luis);
    assert_eq!(db.row_count("customers").await.unwrap(), 2);
}

#[tokio::test]
async fn test_capital_round_trips_exactly() {
    let db = TestDatabase::new().await.unwrap();
    let adapter = SqlCustomerAdapter::new(db.pool.clone());
    let exact = NewCustomer {
        capital: Money::new(dec!(100000.123456)),
        ..record("12345678Z", "ana@example.com")
    };

    adapter.insert(exact).await.unwrap();
    let stored = adapter.find_by_national_id(&nid("12345678Z")).await.unwrap().unwrap();
    assert_eq!(stored.capital.amount(), dec!(100000.123456));
}

#[tokio::test]
async fn test_delete_returns_row_before_deletion() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());
    let inserted = repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();

    let deleted = repo.delete_by_national_id("12345678Z").await.unwrap().unwrap();
    assert_eq!(deleted, inserted);
    assert!(repo.find_by_national_id("12345678Z").await.unwrap().is_none());
    assert!(repo.delete_by_national_id("12345678Z").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let db = TestDatabase::new().await.unwrap();
    let repo = CustomerRepository::new(db.pool.clone());
    repo.insert(row("87654321X", "luis@example.com")).await.unwrap();
    repo.insert(row("12345678Z", "ana@example.com")).await.unwrap();

    let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|r| r.national_id).collect();
    assert_eq!(ids, vec!["87654321X", "12345678Z"]);
}

// ============================================================================
// Simulation repository
// ============================================================================

#[tokio::test]
async fn test_simulations_are_listed_per_national_id() {
    let db = TestDatabase::new().await.unwrap();
    let repo = SimulationRepository::new(db.pool.clone());

    for (national_id, years) in [("12345678Z", 30), ("87654321X", 20), ("12345678Z", 15)] {
        repo.insert(NewSimulationRow {
            national_id: national_id.to_string(),
            annual_rate: "3.5".to_string(),
            term_years: years,
            monthly_payment: "449.04".to_string(),
            total_amount: "161656.09".to_string(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();
    }

    let rows = repo.list_for_national_id("12345678Z").await.unwrap();
    let years: Vec<i64> = rows.iter().map(|r| r.term_years).collect();
    assert_eq!(years, vec![30, 15]);
    assert_eq!(db.row_count("simulations").await.unwrap(), 3);
}

#[tokio::test]
async fn test_non_positive_term_violates_check() {
    let db = TestDatabase::new().await.unwrap();
    let repo = SimulationRepository::new(db.pool.clone());

    let err = repo
        .insert(NewSimulationRow {
            national_id: "12345678Z".to_string(),
            annual_rate: "3.5".to_string(),
            term_years: 0,
            monthly_payment: "0".to_string(),
            total_amount: "0".to_string(),
            created_at: Utc::now(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::ConstraintViolation(_)));
}

// ============================================================================
// Adapters
// ============================================================================

#[tokio::test]
async fn test_customer_adapter_maps_conflict() {
    let db = TestDatabase::new().await.unwrap();
    let adapter = SqlCustomerAdapter::new(db.pool.clone());

    let stored = adapter.insert(record("12345678Z", "ana@example.com")).await.unwrap();
    assert_eq!(stored.capital, Money::new(dec!(50000)));

    let err = adapter.insert(record("87654321X", "ana@example.com")).await.unwrap_err();
    assert!(matches!(err, PortError::Conflict { .. }));
}

#[tokio::test]
async fn test_customer_adapter_update_and_delete() {
    let db = TestDatabase::new().await.unwrap();
    let adapter = SqlCustomerAdapter::new(db.pool.clone());
    adapter.insert(record("12345678Z", "ana@example.com")).await.unwrap();

    let mut changed = record("12345678Z", "ana@example.com");
    changed.capital = Money::new(dec!(75000.25));
    let updated = adapter
        .update_by_national_id(&nid("12345678Z"), changed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.capital.amount(), dec!(75000.25));

    let deleted = adapter.delete_by_national_id(&nid("12345678Z")).await.unwrap().unwrap();
    assert_eq!(deleted, updated);
    assert!(adapter.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_simulations_survive_customer_deletion() {
    let db = TestDatabase::new().await.unwrap();
    let customers = SqlCustomerAdapter::new(db.pool.clone());
    let simulations = SqlSimulationAdapter::new(db.pool.clone());
    customers.insert(record("12345678Z", "ana@example.com")).await.unwrap();

    let terms = LoanTerms::new(dec!(3.5), 30).unwrap();
    let summary = PaymentSummary {
        monthly_payment: Money::new(dec!(449.04)),
        total_amount: Money::new(dec!(161656.09)),
    };
    let recorded = simulations
        .record(NewSimulation::new(nid("12345678Z"), &terms, summary))
        .await
        .unwrap();
    assert_eq!(recorded.annual_rate.as_percentage(), dec!(3.5));
    assert_eq!(recorded.term_years, 30);

    customers.delete_by_national_id(&nid("12345678Z")).await.unwrap();

    let history = simulations.list_for_national_id(&nid("12345678Z")).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].monthly_payment.amount(), dec!(449.04));
}

#[tokio::test]
async fn test_adapters_report_healthy() {
    let db = TestDatabase::new().await.unwrap();

    let customer_health = SqlCustomerAdapter::new(db.pool.clone()).health_check().await;
    let simulation_health = SqlSimulationAdapter::new(db.pool.clone()).health_check().await;

    assert!(customer_health.is_operational());
    assert!(simulation_health.is_operational());
}
