use searchtree::DualKeyIndex;

/// Builds an index of one record per mark: ids count up from E100 and
/// the payload remembers each record's position in `marks`.
fn roster(marks: &[i8]) -> DualKeyIndex<String, i8, usize> {
    let mut index = DualKeyIndex::new();
    for (position, mark) in marks.iter().enumerate() {
        index.add_record(format!("E{}", 100 + position), *mark, position);
    }
    index
}

quickcheck::quickcheck! {
    fn every_position_is_reachable_by_id(marks: Vec<i8>) -> bool {
        let index = roster(&marks);

        index.len() == marks.len()
            && (0..marks.len()).all(|position| {
                let id = format!("E{}", 100 + position);
                match index.find_by_primary(id.as_str()) {
                    Some(record) => *record.data() == position,
                    None => false,
                }
            })
    }

    fn lookups_by_either_key_land_on_the_same_record(marks: Vec<i8>) -> bool {
        let index = roster(&marks);
        let mut unique = marks;
        unique.sort();
        unique.dedup();

        unique.into_iter().all(|mark| {
            let by_mark = match index.find_by_secondary(&mark) {
                Some(record) => record,
                None => return false,
            };
            match index.find_by_primary(by_mark.primary().as_str()) {
                Some(by_id) => std::ptr::eq(by_id, by_mark),
                None => false,
            }
        })
    }

    fn listings_are_sorted_by_their_key(marks: Vec<i8>) -> bool {
        let index = roster(&marks);

        let ids: Vec<_> = index
            .records_by_primary()
            .map(|record| record.primary().clone())
            .collect();
        let mut sorted_ids = ids.clone();
        sorted_ids.sort();

        let listed: Vec<_> = index
            .records_by_secondary()
            .map(|record| *record.secondary())
            .collect();
        let mut sorted_marks = marks;
        sorted_marks.sort();

        ids == sorted_ids && listed == sorted_marks
    }

    fn duplicated_marks_resolve_to_the_first_added(marks: Vec<i8>) -> bool {
        let index = roster(&marks);

        marks.iter().all(|mark| {
            match index.find_by_secondary(mark) {
                // The payload records insertion position, so the record
                // found must be the mark's first occurrence.
                Some(record) => marks.iter().position(|m| m == mark) == Some(*record.data()),
                None => false,
            }
        })
    }
}
