use crate::ProfileSet;
use transect::C;

/// Stacked elevation rows for a waterfall-style display.
///
/// Each profile is rebased so its lowest point sits at zero, then
/// raised by a running offset that grows by `increment` per profile.
/// Rows come out in lexicographic name order, bottom of the stack
/// first. Distances are untouched; pair each row with its profile's
/// own distance samples.
pub fn waterfall(set: &ProfileSet, base: C, increment: C) -> Vec<(String, Vec<C>)> {
    set.iter()
        .scan(base, |base, profile| {
            let floor = profile.min_elevation();
            let row = profile
                .elevation
                .iter()
                .map(|y| y - floor + *base)
                .collect();
            *base += increment;
            Some((profile.name.clone(), row))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::waterfall;
    use crate::ProfileSet;
    use transect::Profile;

    #[test]
    fn test_waterfall_stacks_in_name_order() {
        let mut set = ProfileSet::new();
        set.insert(Profile {
            name: "b".to_string(),
            distance: vec![0.0, 1.0],
            elevation: vec![104.0, 107.0],
        });
        set.insert(Profile {
            name: "a".to_string(),
            distance: vec![0.0, 1.0],
            elevation: vec![12.0, 10.0],
        });

        let rows = waterfall(&set, 0.0, 500.0);
        assert_eq!(rows.len(), 2);

        let (name, row) = &rows[0];
        assert_eq!(name, "a");
        assert_eq!(row, &vec![2.0, 0.0]);

        let (name, row) = &rows[1];
        assert_eq!(name, "b");
        assert_eq!(row, &vec![500.0, 503.0]);
    }

    #[test]
    fn test_waterfall_base_offset() {
        let mut set = ProfileSet::new();
        set.insert(Profile {
            name: "only".to_string(),
            distance: vec![0.0, 1.0],
            elevation: vec![3.0, 5.0],
        });
        let rows = waterfall(&set, 100.0, 500.0);
        assert_eq!(rows[0].1, vec![100.0, 102.0]);
    }
}
