// 📋 Board - the record store plus the wealth summaries shown under it
// State transitions are pure: (Board, Transition) -> Board + Outcome

use crate::person::Person;
use crate::transforms::{calculate_wealth, double_money, show_millionaires, sort_by_richest};
use serde::Serialize;

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Input to a single state transition.
///
/// `Append` carries an already fetched person, so applying a transition never
/// touches the network.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Append(Person),
    DoubleMoney,
    SortByRichest,
    ShowMillionaires,
    CalculateWealth,
}

/// What the display has to do after a transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The store changed; redraw the whole list.
    Rerender,

    /// The store is untouched; append one summary line with this total.
    Summary { total: f64 },
}

// ============================================================================
// BOARD
// ============================================================================

/// Owned application state: the ordered store and pending summary lines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Board {
    people: Vec<Person>,
    summaries: Vec<f64>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: Vec<Person>) -> Self {
        Board {
            people,
            summaries: Vec::new(),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Wealth totals appended since the last full re-render, oldest first.
    pub fn summaries(&self) -> &[f64] {
        &self.summaries
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Apply one transition.
    ///
    /// Store-changing transitions clear the summaries, since a full re-render
    /// wipes the display down to its heading. `CalculateWealth` only appends.
    pub fn apply(&mut self, transition: Transition) -> Outcome {
        match transition {
            Transition::Append(person) => {
                self.people.push(person);
                self.rerender()
            }
            Transition::DoubleMoney => self.replace(double_money(&self.people)),
            Transition::SortByRichest => self.replace(sort_by_richest(&self.people)),
            Transition::ShowMillionaires => self.replace(show_millionaires(&self.people)),
            Transition::CalculateWealth => {
                let total = calculate_wealth(&self.people);
                self.summaries.push(total);
                Outcome::Summary { total }
            }
        }
    }

    fn replace(&mut self, people: Vec<Person>) -> Outcome {
        self.people = people;
        self.rerender()
    }

    fn rerender(&mut self) -> Outcome {
        self.summaries.clear();
        Outcome::Rerender
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut board = Board::new();
        board.apply(Transition::Append(Person::new("One", 1.0)));
        board.apply(Transition::Append(Person::new("Two", 2.0)));

        let names: Vec<&str> = board.people().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut board = Board::with_people(vec![
            Person::new("A", 500_000.0),
            Person::new("B", 1_500_000.0),
        ]);

        assert_eq!(board.apply(Transition::ShowMillionaires), Outcome::Rerender);
        assert_eq!(board.people(), &[Person::new("B", 1_500_000.0)]);

        assert_eq!(
            board.apply(Transition::CalculateWealth),
            Outcome::Summary { total: 1_500_000.0 }
        );
        assert_eq!(board.summaries(), &[1_500_000.0]);

        assert_eq!(board.apply(Transition::DoubleMoney), Outcome::Rerender);
        assert_eq!(board.people(), &[Person::new("B", 3_000_000.0)]);
    }

    #[test]
    fn test_millionaire_filter_is_irreversible() {
        let mut board = Board::with_people(vec![
            Person::new("A", 600_000.0),
            Person::new("B", 1_200_000.0),
        ]);

        board.apply(Transition::ShowMillionaires);
        board.apply(Transition::DoubleMoney);

        // A would now be above the threshold, but it is gone for good
        assert_eq!(board.people(), &[Person::new("B", 2_400_000.0)]);
    }

    #[test]
    fn test_wealth_summaries_accumulate_until_rerender() {
        let mut board = Board::with_people(vec![Person::new("A", 10.0)]);

        board.apply(Transition::CalculateWealth);
        board.apply(Transition::CalculateWealth);
        assert_eq!(board.summaries(), &[10.0, 10.0]);
        assert_eq!(board.len(), 1);

        board.apply(Transition::SortByRichest);
        assert!(board.summaries().is_empty());
    }

    #[test]
    fn test_wealth_of_empty_board() {
        let mut board = Board::new();
        assert!(board.is_empty());
        assert_eq!(
            board.apply(Transition::CalculateWealth),
            Outcome::Summary { total: 0.0 }
        );
    }
}
