// 🔁 Transformations - pure functions over the record store
// Each one takes the current people and computes a new sequence (or a total)

use crate::person::Person;

/// Strict lower bound for `show_millionaires`.
pub const MILLIONAIRE_THRESHOLD: f64 = 1_000_000.0;

/// Every person with their money multiplied by 2. Overflow is not guarded.
pub fn double_money(people: &[Person]) -> Vec<Person> {
    people
        .iter()
        .map(|person| person.with_money(person.money * 2.0))
        .collect()
}

/// Same people ordered by money, richest first.
///
/// The sort is stable: equal amounts keep their previous relative order.
pub fn sort_by_richest(people: &[Person]) -> Vec<Person> {
    let mut sorted = people.to_vec();
    sorted.sort_by(|a, b| b.money.total_cmp(&a.money));
    sorted
}

/// Only the people holding strictly more than one million, in their current order.
pub fn show_millionaires(people: &[Person]) -> Vec<Person> {
    people
        .iter()
        .filter(|person| person.money > MILLIONAIRE_THRESHOLD)
        .cloned()
        .collect()
}

/// Sum of everyone's money; 0 for an empty store.
pub fn calculate_wealth(people: &[Person]) -> f64 {
    people.iter().fold(0.0, |acc, person| acc + person.money)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Person> {
        vec![
            Person::new("Ann Lee", 500_000.0),
            Person::new("Bob Ray", 1_500_000.0),
            Person::new("Cid Moe", 1_000_000.0),
            Person::new("Dee Fox", 750_000.0),
        ]
    }

    #[test]
    fn test_double_money() {
        let people = sample();
        let doubled = double_money(&people);

        assert_eq!(doubled.len(), people.len());
        for (before, after) in people.iter().zip(&doubled) {
            assert_eq!(after.name, before.name);
            assert_eq!(after.money, before.money * 2.0);
        }
    }

    #[test]
    fn test_sort_by_richest_is_descending_permutation() {
        let people = sample();
        let sorted = sort_by_richest(&people);

        assert_eq!(sorted.len(), people.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].money >= pair[1].money);
        }
        for person in &people {
            assert!(sorted.contains(person));
        }
        assert_eq!(sorted[0].name, "Bob Ray");
        assert_eq!(sorted[3].name, "Ann Lee");
    }

    #[test]
    fn test_sort_by_richest_keeps_ties_in_order() {
        let people = vec![
            Person::new("First", 10.0),
            Person::new("Second", 20.0),
            Person::new("Third", 10.0),
        ];
        let sorted = sort_by_richest(&people);

        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First", "Third"]);
    }

    #[test]
    fn test_show_millionaires_is_strict() {
        let filtered = show_millionaires(&sample());

        // exactly one million is not a millionaire
        assert_eq!(filtered, vec![Person::new("Bob Ray", 1_500_000.0)]);
    }

    #[test]
    fn test_show_millionaires_preserves_order() {
        let people = vec![
            Person::new("Zed", 3_000_000.0),
            Person::new("Poor", 10.0),
            Person::new("Amy", 2_000_000.0),
        ];
        let filtered = show_millionaires(&people);

        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_calculate_wealth() {
        assert_eq!(calculate_wealth(&sample()), 3_750_000.0);
    }

    #[test]
    fn test_calculate_wealth_empty() {
        assert_eq!(calculate_wealth(&[]), 0.0);
    }

    #[test]
    fn test_transforms_on_empty_store() {
        assert!(double_money(&[]).is_empty());
        assert!(sort_by_richest(&[]).is_empty());
        assert!(show_millionaires(&[]).is_empty());
    }
}
