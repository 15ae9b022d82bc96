use kanban_core::collate::locale_cmp;
use kanban_core::model::{Grouping, Ordering, Priority, Ticket};
use kanban_core::projector::{Group, project};
use kanban_core::view::{QueryHistory, SelectorStore, ViewSelectors, ViewStateStore};
use proptest::prelude::*;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use generators::*;

fn nfd(s: &str) -> String {
    s.nfd().collect()
}

const STATUS_COLUMNS: [&str; 5] = ["Backlog", "Todo", "In progress", "Done", "Cancelled"];

fn input_position(tickets: &[Ticket]) -> HashMap<&str, usize> {
    tickets
        .iter()
        .enumerate()
        .map(|(idx, t)| (t.id.as_str(), idx))
        .collect()
}

fn column_ids(groups: &[Group<'_>]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| g.tickets.iter().map(|t| t.id.clone()).collect())
        .collect()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn output_is_a_permutation_of_input(
        tickets in arb_tickets(),
        users in arb_users(),
        selectors in arb_selectors(),
    ) {
        let groups = project(&tickets, &users, &selectors);
        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.tickets.iter().map(|t| t.id.as_str()))
            .collect();
        let mut expected: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn status_grouping_starts_with_five_columns(
        tickets in arb_tickets(),
        ordering in arb_ordering(),
    ) {
        let selectors = ViewSelectors::new(Grouping::Status, ordering);
        let groups = project(&tickets, &[], &selectors);
        let leading: Vec<&str> = groups.iter().take(5).map(|g| g.key.as_str()).collect();
        prop_assert_eq!(leading, STATUS_COLUMNS.to_vec());
        for group in groups.iter().skip(5) {
            prop_assert!(!group.tickets.is_empty());
        }
    }

    #[test]
    fn priority_keys_are_labels_in_first_encounter_order(
        tickets in arb_tickets(),
        ordering in arb_ordering(),
    ) {
        let selectors = ViewSelectors::new(Grouping::Priority, ordering);
        let groups = project(&tickets, &[], &selectors);
        let labels: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();

        let mut expected_order: Vec<&str> = Vec::new();
        for ticket in &tickets {
            let label = ticket
                .priority_level()
                .unwrap_or(Priority::NoPriority)
                .label();
            if !expected_order.contains(&label) {
                expected_order.push(label);
            }
        }

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        for key in &keys {
            prop_assert!(labels.contains(key));
        }
        prop_assert_eq!(keys, expected_order);
    }

    #[test]
    fn priority_ordering_is_stable(
        tickets in arb_tickets(),
        grouping in arb_grouping(),
    ) {
        let position = input_position(&tickets);
        let selectors = ViewSelectors::new(grouping, Ordering::Priority);
        for group in project(&tickets, &[], &selectors) {
            for pair in group.tickets.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.priority <= b.priority);
                if a.priority == b.priority {
                    prop_assert!(position[a.id.as_str()] < position[b.id.as_str()]);
                }
            }
        }
    }

    #[test]
    fn title_ordering_is_sorted_and_idempotent(
        tickets in arb_tickets(),
        grouping in arb_grouping(),
    ) {
        let selectors = ViewSelectors::new(grouping, Ordering::Title);
        let groups = project(&tickets, &[], &selectors);
        for group in &groups {
            for pair in group.tickets.windows(2) {
                prop_assert!(locale_cmp(&pair[0].title, &pair[1].title).is_le());
            }
        }

        // Re-projecting already-sorted tickets keeps the same order.
        let flattened: Vec<Ticket> = groups
            .iter()
            .flat_map(|g| g.tickets.iter().map(|t| (*t).clone()))
            .collect();
        let again = project(&flattened, &[], &selectors);
        prop_assert_eq!(column_ids(&groups), column_ids(&again));
    }

    #[test]
    fn locale_cmp_is_a_total_order(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        prop_assert_eq!(locale_cmp(&a, &b), locale_cmp(&b, &a).reverse());
        prop_assert_eq!(locale_cmp(&a, &b).is_eq(), nfd(&a) == nfd(&b));
        if locale_cmp(&a, &b).is_le() && locale_cmp(&b, &c).is_le() {
            prop_assert!(locale_cmp(&a, &c).is_le());
        }
    }

    #[test]
    fn set_grouping_keeps_ordering_in_query(
        initial in arb_ordering(),
        grouping in prop_oneof![
            Just(Grouping::Status),
            Just(Grouping::Priority),
            Just(Grouping::Assignee),
        ],
    ) {
        let start = ViewSelectors::new(Grouping::Status, initial).to_query();
        let mut view = ViewStateStore::new(QueryHistory::new(start));
        view.set_grouping(grouping);
        let reread = view.store().read_selectors();
        prop_assert_eq!(reread.grouping, grouping);
        prop_assert_eq!(reread.ordering, initial);
    }

    #[test]
    fn arbitrary_queries_always_yield_defined_selectors(query in ".{0,40}") {
        let selectors = ViewSelectors::parse_from_query(&query);
        let reparsed = ViewSelectors::parse_from_query(&selectors.to_query());
        prop_assert_eq!(selectors, reparsed);
    }
}
