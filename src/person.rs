// 👤 Person - the only record kept on the board
// A display name paired with a money amount

use serde::{Deserialize, Serialize};

/// A single record in the store.
///
/// `money` is non-negative when the record is created; transforms may rewrite
/// it (doubling) but never validate it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// First and last name joined by a single space
    pub name: String,

    /// Currency-like amount, no fixed scale
    pub money: f64,
}

impl Person {
    pub fn new(name: impl Into<String>, money: f64) -> Self {
        Person {
            name: name.into(),
            money,
        }
    }

    /// Build a person from separate first/last name parts.
    pub fn from_name_parts(first: &str, last: &str, money: f64) -> Self {
        Person::new(format!("{} {}", first, last), money)
    }

    /// Copy of this person with a different money amount.
    pub fn with_money(&self, money: f64) -> Self {
        Person {
            name: self.name.clone(),
            money,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_parts_joins_with_single_space() {
        let person = Person::from_name_parts("Ada", "Lovelace", 42.0);
        assert_eq!(person.name, "Ada Lovelace");
        assert_eq!(person.money, 42.0);
    }

    #[test]
    fn test_with_money_keeps_name() {
        let person = Person::new("Grace Hopper", 10.0);
        let richer = person.with_money(20.0);

        assert_eq!(richer.name, "Grace Hopper");
        assert_eq!(richer.money, 20.0);
        assert_eq!(person.money, 10.0);
    }

    #[test]
    fn test_serde_shape() {
        let person = Person::new("Alan Turing", 1500.0);
        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json, serde_json::json!({"name": "Alan Turing", "money": 1500.0}));
    }
}
