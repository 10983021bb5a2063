use crate::types::{change_range::ChangeRange, range_kind::RangeKind, span::Span};

/// Outcome of laying an incoming range onto the merged entry it is anchored
/// at.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<'a> {
    /// Replaces the anchor entry in the merged list.
    pub replacement: Vec<ChangeRange<'a>>,
    /// Part of the incoming range reaching past the anchor entry. It has to be
    /// merged against the following entries.
    pub remainder: Option<ChangeRange<'a>>,
}

/// Combines a merged entry that is visible in the previous revision with an
/// incoming range from the comparison of that revision with the next one.
///
/// The longer of the two is split at the end of the shorter one. The overlap
/// is re-attributed: text that is still present keeps the provenance of the
/// entry that introduced it and becomes visible in the new revision, deleted
/// text is attributed to the deleting revision. Insertions have no
/// counterpart in the merged list and are placed right before the anchor.
///
/// # Panics
///
/// Panics if `anchor` is a deleted entry. Deleted entries are not part of the
/// previous revision, so nothing can be anchored at them.
#[must_use]
pub fn combine<'a>(anchor: &ChangeRange<'a>, incoming: ChangeRange<'a>) -> Combination<'a> {
    match (anchor.kind(), incoming.kind()) {
        (RangeKind::Equal, RangeKind::Equal) => retain(anchor, incoming, |anchor, incoming| {
            ChangeRange::equal(
                incoming.left(),
                incoming.right(),
                incoming.fragment(),
                anchor.provenance(),
            )
        }),
        (RangeKind::Insert, RangeKind::Equal) => retain(anchor, incoming, |anchor, incoming| {
            ChangeRange::insert(
                Span::empty_at(incoming.left().start),
                incoming.right(),
                incoming.fragment(),
                anchor.provenance(),
            )
        }),
        (RangeKind::Equal | RangeKind::Insert, RangeKind::Delete) => {
            retain(anchor, incoming, |_, incoming| incoming.clone())
        }
        (RangeKind::Equal | RangeKind::Insert, RangeKind::Insert) => {
            let version_number = incoming.version_number();

            Combination {
                replacement: vec![
                    incoming.with_last_visible_version(version_number),
                    anchor.clone(),
                ],
                remainder: None,
            }
        }
        (RangeKind::Delete, _) => unreachable!("Deleted entries are never used as anchors"),
    }
}

/// Splits `anchor` and `incoming` to the length of their overlap and builds
/// the merged entry for the overlap with `overlap`. The merged entry is marked
/// as visible in the incoming revision; the rest of the anchor keeps waiting
/// for the next incoming range.
fn retain<'a>(
    anchor: &ChangeRange<'a>,
    incoming: ChangeRange<'a>,
    overlap: impl FnOnce(&ChangeRange<'a>, &ChangeRange<'a>) -> ChangeRange<'a>,
) -> Combination<'a> {
    let length = anchor.len().min(incoming.len());
    let version_number = incoming.version_number();

    let (anchor_head, anchor_tail) = split_off(anchor.clone(), length);
    let (incoming_head, remainder) = split_off(incoming, length);

    let merged = overlap(&anchor_head, &incoming_head).with_last_visible_version(version_number);

    Combination {
        replacement: std::iter::once(merged).chain(anchor_tail).collect(),
        remainder,
    }
}

fn split_off(range: ChangeRange<'_>, length: usize) -> (ChangeRange<'_>, Option<ChangeRange<'_>>) {
    if length < range.len() {
        let (head, tail) = range.split_at(length);
        (head, Some(tail))
    } else {
        (range, None)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::provenance::Provenance;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 1, 14)
            .unwrap()
            .and_hms_opt(15, 16, 50)
            .unwrap()
    }

    fn provenance(version_number: u32) -> Provenance<'static> {
        let author = match version_number {
            1 => "alice",
            2 => "bob",
            _ => "carol",
        };

        Provenance {
            author,
            created_at: at(),
            version_number,
        }
    }

    fn describe(ranges: &[ChangeRange<'_>]) -> Vec<String> {
        ranges.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_equal_anchor_longer_than_equal_range() {
        let anchor = ChangeRange::equal(Span::new(0, 3), Span::new(0, 3), "abc", provenance(1))
            .with_last_visible_version(2);
        let incoming = ChangeRange::equal(Span::new(0, 2), Span::new(0, 2), "ab", provenance(3));

        let combination = combine(&anchor, incoming);

        assert_eq!(
            describe(&combination.replacement),
            vec![r#"= v1..v3 "ab""#, r#"= v1..v2 "c""#]
        );
        assert_eq!(combination.replacement[0].author(), "alice");
        assert_eq!(combination.replacement[1].right(), Span::new(2, 3));
        assert_eq!(combination.remainder, None);
    }

    #[test]
    fn test_equal_range_longer_than_anchor() {
        let anchor = ChangeRange::equal(Span::new(0, 6), Span::new(0, 6), "hello ", provenance(1))
            .with_last_visible_version(2);
        let incoming = ChangeRange::equal(
            Span::new(0, 12),
            Span::new(0, 12),
            "hello brave ",
            provenance(3),
        );

        let combination = combine(&anchor, incoming);

        assert_eq!(describe(&combination.replacement), vec![r#"= v1..v3 "hello ""#]);

        let remainder = combination.remainder.unwrap();
        assert_eq!(remainder.to_string(), r#"= v3..v3 "brave ""#);
        assert_eq!(remainder.left(), Span::new(6, 12));
        assert_eq!(remainder.right(), Span::new(6, 12));
    }

    #[test]
    fn test_insert_anchor_stays_insert() {
        let anchor = ChangeRange::insert(Span::empty_at(6), Span::new(6, 12), "brave ", provenance(2));
        let incoming = ChangeRange::equal(Span::new(6, 12), Span::new(8, 14), "brave ", provenance(3));

        let combination = combine(&anchor, incoming);

        assert_eq!(describe(&combination.replacement), vec![r#"+ v2..v3 "brave ""#]);
        assert_eq!(combination.replacement[0].left(), Span::empty_at(6));
        assert_eq!(combination.replacement[0].right(), Span::new(8, 14));
        assert_eq!(combination.replacement[0].author(), "bob");
    }

    #[test]
    fn test_insert_anchor_longer_than_equal_range() {
        let anchor = ChangeRange::insert(Span::empty_at(6), Span::new(6, 12), "brave ", provenance(2));
        let incoming = ChangeRange::equal(Span::new(6, 9), Span::new(6, 9), "bra", provenance(3));

        let combination = combine(&anchor, incoming);

        assert_eq!(
            describe(&combination.replacement),
            vec![r#"+ v2..v3 "bra""#, r#"+ v2..v2 "ve ""#]
        );
        assert_eq!(combination.replacement[1].right(), Span::new(9, 12));
    }

    #[test]
    fn test_delete_of_equal_anchor() {
        let anchor = ChangeRange::equal(Span::new(0, 3), Span::new(2, 5), "abc", provenance(1))
            .with_last_visible_version(2);
        let incoming = ChangeRange::delete(Span::new(2, 3), Span::empty_at(2), "a", provenance(3));

        let combination = combine(&anchor, incoming);

        assert_eq!(
            describe(&combination.replacement),
            vec![r#"- v3..v3 "a""#, r#"= v1..v2 "bc""#]
        );
        assert_eq!(combination.replacement[0].author(), "carol");
        assert_eq!(combination.replacement[1].right(), Span::new(3, 5));
    }

    #[test]
    fn test_delete_longer_than_insert_anchor() {
        let anchor = ChangeRange::insert(Span::empty_at(6), Span::new(6, 12), "brave ", provenance(2));
        let incoming =
            ChangeRange::delete(Span::new(6, 17), Span::empty_at(6), "brave world", provenance(3));

        let combination = combine(&anchor, incoming);

        assert_eq!(describe(&combination.replacement), vec![r#"- v3..v3 "brave ""#]);

        let remainder = combination.remainder.unwrap();
        assert_eq!(remainder.to_string(), r#"- v3..v3 "world""#);
        assert_eq!(remainder.left(), Span::new(12, 17));
        assert_eq!(remainder.right(), Span::empty_at(6));
    }

    #[test]
    fn test_insert_goes_before_anchor() {
        let anchor = ChangeRange::equal(Span::new(6, 11), Span::new(12, 17), "world", provenance(1))
            .with_last_visible_version(2);
        let incoming = ChangeRange::insert(Span::empty_at(12), Span::new(12, 16), "new ", provenance(3));

        let combination = combine(&anchor, incoming);

        assert_eq!(
            describe(&combination.replacement),
            vec![r#"+ v3..v3 "new ""#, r#"= v1..v2 "world""#]
        );
        assert_eq!(combination.remainder, None);
    }
}
