//! Partition a route's stops by contributor.

use std::collections::HashMap;

use carpool_core::{ContributorKey, Stop};

/// Split `stops` into one group per contributor.
///
/// Groups are emitted in the order their contributor is first seen, and each
/// group keeps its stops in input order. That emission order fixes the
/// branching priority used by
/// [`enumerate_interleavings`](crate::enumerate_interleavings).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::Stop;
/// use carpool_deviation::group_by_contributor;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let stops = vec![
///     Stop::new(1, origin),
///     Stop::new(2, origin).with_application(9),
///     Stop::new(3, origin),
/// ];
/// let groups = group_by_contributor(&stops);
/// let ids: Vec<Vec<u64>> = groups
///     .iter()
///     .map(|group| group.iter().map(|stop| stop.id).collect())
///     .collect();
/// assert_eq!(ids, vec![vec![1, 3], vec![2]]);
/// ```
#[must_use]
pub fn group_by_contributor<'a, I>(stops: I) -> Vec<Vec<&'a Stop>>
where
    I: IntoIterator<Item = &'a Stop>,
{
    let mut groups: Vec<Vec<&'a Stop>> = Vec::new();
    let mut index_of: HashMap<ContributorKey, usize> = HashMap::new();

    for stop in stops {
        let index = *index_of.entry(stop.contributor()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(index) {
            group.push(stop);
        }
    }
    groups
}
