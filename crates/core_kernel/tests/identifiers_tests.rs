//! Unit tests for the Identifiers module

use core_kernel::{CustomerId, SimulationId};

mod customer_id_tests {
    use super::*;

    #[test]
    fn test_value_round_trips() {
        let id = CustomerId::new(15);
        assert_eq!(id.value(), 15);
        assert_eq!(i64::from(id), 15);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(CustomerId::prefix(), "CUS");
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: CustomerId = "99".parse().unwrap();
        assert_eq!(parsed, CustomerId::new(99));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("CUS-abc".parse::<CustomerId>().is_err());
    }

    #[test]
    fn test_ordering_follows_assignment() {
        assert!(CustomerId::new(1) < CustomerId::new(2));
    }
}

mod simulation_id_tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(SimulationId::new(3).to_string(), "SIM-3");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&SimulationId::new(8)).unwrap();
        assert_eq!(json, "8");

        let back: SimulationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SimulationId::new(8));
    }
}
