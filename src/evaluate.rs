use crate::types::{ConditionEntry, TransformRecord, ValidationStatus};

/// Walk `entries` in order and stop at the first active entry whose predicate
/// is unmet. Inactive entries pass without their predicate being called.
pub(crate) fn evaluate(entries: &[ConditionEntry], input: Option<&str>) -> ValidationStatus {
    let mut current = input.map(str::to_owned);
    let mut transforms = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if let Some(transformed) = &entry.transformed_input {
            current = Some(transformed.clone());
            transforms.push(TransformRecord {
                index,
                input: transformed.clone(),
            });
        }

        if !entry.is_active() {
            tracing::trace!(index, "condition skipped, guard inactive");
            continue;
        }

        if !entry.is_met(current.as_deref()) {
            tracing::debug!(index, "condition unmet");
            return ValidationStatus::new(
                Some((index, entry.message.clone())),
                input.map(str::to_owned),
                transforms,
            );
        }
    }

    ValidationStatus::new(None, input.map(str::to_owned), transforms)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting(hits: &Rc<Cell<usize>>, result: bool) -> impl Fn(Option<&str>) -> bool {
        let hits = Rc::clone(hits);
        move |_: Option<&str>| {
            hits.set(hits.get() + 1);
            result
        }
    }

    #[test]
    fn only_initial_entry_is_valid() {
        let entries = vec![ConditionEntry::initial(None)];
        let status = evaluate(&entries, None);
        assert!(status.is_valid());
        assert!(status.transforms().is_empty());
    }

    #[test]
    fn initial_anchor_is_recorded() {
        let entries = vec![ConditionEntry::initial(Some("abc".into()))];
        let status = evaluate(&entries, Some("abc"));
        assert_eq!(
            status.transforms(),
            &[TransformRecord {
                index: 0,
                input: "abc".into()
            }]
        );
    }

    #[test]
    fn stops_at_first_failure() {
        let third = Rc::new(Cell::new(0));
        let entries = vec![
            ConditionEntry::initial(None),
            ConditionEntry::new(|_| true, "first"),
            ConditionEntry::new(|_| false, "second"),
            ConditionEntry::new(counting(&third, false), "third"),
        ];
        let status = evaluate(&entries, Some("x"));
        assert_eq!(status.failed_index(), Some(2));
        assert_eq!(third.get(), 0);
    }

    #[test]
    fn inactive_entry_never_runs_predicate() {
        let hits = Rc::new(Cell::new(0));
        let entries = vec![
            ConditionEntry::initial(None),
            ConditionEntry::new(counting(&hits, false), "guarded").depends_on(|| false),
        ];
        let status = evaluate(&entries, Some("x"));
        assert!(status.is_valid());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn transform_threads_forward() {
        let mut stripped = ConditionEntry::new(|_| true, "noop");
        stripped.transformed_input = Some("ab".into());
        let entries = vec![
            ConditionEntry::initial(None),
            stripped,
            ConditionEntry::new(|input| input == Some("ab"), "sees transform"),
        ];
        let status = evaluate(&entries, Some(" ab "));
        assert!(status.is_valid());
        assert_eq!(status.last_transformed_input(), Some("ab"));
        assert_eq!(status.input(), Some(" ab "));
    }

    #[test]
    fn transforms_after_failure_are_not_recorded() {
        let mut later = ConditionEntry::new(|_| true, "later");
        later.transformed_input = Some("late".into());
        let entries = vec![
            ConditionEntry::initial(None),
            ConditionEntry::new(|_| false, "fail"),
            later,
        ];
        let status = evaluate(&entries, Some("x"));
        assert!(status.transforms().is_empty());
        assert_eq!(status.last_transformed_input(), Some("x"));
    }
}
