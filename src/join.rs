use {
    crate::{
        error::{JoinError, JoinResult},
        range::{KeyRange, RightBound},
        region::HashRegion,
    },
    std::cmp::Ordering,
};

/// Verifies that the ranges exactly and disjointly tile one interval and
/// returns that interval.
///
/// The ranges are claimed by independent shards; neither their order nor
/// their honesty is assumed. A hole between two claims yields
/// [`JoinError::BadRegion`], a doubly-claimed stretch yields
/// [`JoinError::BadJoin`]. The result is a pure function of the input
/// multiset, so peers joining the same claims agree on the outcome.
///
/// An empty input joins to the empty range. Empty member ranges act as
/// zero-width claims: they pass only where they sit exactly on the seam
/// between their neighbours, so callers normally exclude them.
pub fn join_ranges(ranges: &[KeyRange]) -> JoinResult<KeyRange> {
    if ranges.is_empty() {
        return Ok(KeyRange::empty());
    }

    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| (*r.left(), *r.right()));

    // Sweep left to right: every range must start exactly where the
    // previous one stopped.
    let left = *sorted[0].left();
    let mut cursor = RightBound::Bounded(left);
    for range in &sorted {
        let edge = RightBound::Bounded(*range.left());
        match cursor.cmp(&edge) {
            Ordering::Less => return Err(JoinError::BadRegion),
            Ordering::Greater => return Err(JoinError::BadJoin),
            Ordering::Equal => cursor = *range.right(),
        }
    }

    Ok(KeyRange::from_parts(left, cursor))
}

/// Verifies that the regions exactly and disjointly tile one rectangle in
/// (hash, key) space and returns that rectangle.
///
/// Unlike the one-dimensional sweep, regions from independently-split
/// shards need not line up into a clean grid; they only claim to cover a
/// rectangle jointly. The check projects every region edge onto its axis,
/// partitions the bounding rectangle into the induced grid of cells, and
/// demands that every cell is claimed exactly once: a doubly-claimed cell
/// is [`JoinError::BadJoin`], an unclaimed one [`JoinError::BadRegion`].
///
/// Overlaps are detected while regions are placed and coverage only after
/// all of them are, so a region set carrying both defects always reports
/// `BadJoin` regardless of input order.
pub fn join_regions(regions: &[HashRegion]) -> JoinResult<HashRegion> {
    if regions.iter().all(HashRegion::is_empty) {
        return Ok(HashRegion::empty());
    }

    // Distinct edge coordinates on each axis. Left key edges are wrapped as
    // right bounds so both kinds of edge sort through one ordering, with
    // the unbounded marker last.
    let mut hash_cuts: Vec<u64> = Vec::with_capacity(regions.len() * 2);
    let mut key_cuts: Vec<RightBound> = Vec::with_capacity(regions.len() * 2);
    for region in regions {
        hash_cuts.push(region.beg());
        hash_cuts.push(region.end());
        key_cuts.push(RightBound::Bounded(*region.key_range().left()));
        key_cuts.push(*region.key_range().right());
    }
    hash_cuts.sort_unstable();
    hash_cuts.dedup();
    key_cuts.sort_unstable();
    key_cuts.dedup();

    if hash_cuts.len() < 2 || key_cuts.len() < 2 {
        // A non-empty region contributes two distinct cuts per axis.
        return Err(JoinError::BadRegion);
    }

    let rows = hash_cuts.len() - 1;
    let cols = key_cuts.len() - 1;
    let mut claimed = vec![false; rows * cols];

    for region in regions {
        let row_beg = hash_cuts
            .binary_search(&region.beg())
            .expect("region edge is a cut");
        let row_end = hash_cuts
            .binary_search(&region.end())
            .expect("region edge is a cut");
        let col_beg = key_cuts
            .binary_search(&RightBound::Bounded(*region.key_range().left()))
            .expect("region edge is a cut");
        let col_end = key_cuts
            .binary_search(region.key_range().right())
            .expect("region edge is a cut");

        for row in row_beg..row_end {
            for cell in &mut claimed[row * cols + col_beg..row * cols + col_end] {
                if *cell {
                    return Err(JoinError::BadJoin);
                }
                *cell = true;
            }
        }
    }

    if claimed.iter().any(|&cell| !cell) {
        return Err(JoinError::BadRegion);
    }

    let left = *key_cuts[0]
        .key()
        .expect("unbounded sorts after every bounded cut");
    let inner = KeyRange::from_parts(left, key_cuts[cols]);
    Ok(HashRegion::new(hash_cuts[0], hash_cuts[rows], inner))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::key::Key,
        std::ops::Bound,
    };

    fn key(bytes: &[u8]) -> Key {
        Key::from_bytes(bytes).unwrap()
    }

    fn range(left: &[u8], right: &[u8]) -> KeyRange {
        KeyRange::new(Bound::Included(key(left)), Bound::Excluded(key(right)))
    }

    #[test]
    fn ranges_join_regardless_of_order() {
        let tiles = [range(b"g", b"m"), range(b"a", b"g"), range(b"m", b"z")];
        assert_eq!(join_ranges(&tiles), Ok(range(b"a", b"z")));

        let mut reversed = tiles;
        reversed.reverse();
        assert_eq!(join_ranges(&reversed), Ok(range(b"a", b"z")));
    }

    #[test]
    fn range_join_reports_gaps_and_overlaps() {
        let gap = [range(b"a", b"g"), range(b"h", b"z")];
        assert_eq!(join_ranges(&gap), Err(JoinError::BadRegion));

        let overlap = [range(b"a", b"h"), range(b"g", b"z")];
        assert_eq!(join_ranges(&overlap), Err(JoinError::BadJoin));

        let duplicate = [range(b"a", b"g"), range(b"a", b"g")];
        assert_eq!(join_ranges(&duplicate), Err(JoinError::BadJoin));
    }

    #[test]
    fn range_join_edge_inputs() {
        assert_eq!(join_ranges(&[]), Ok(KeyRange::empty()));

        let lone = range(b"a", b"b");
        assert_eq!(join_ranges(&[lone]), Ok(lone));

        // An unbounded tail caps the join; nothing fits after it.
        let tiles = [
            range(b"a", b"m"),
            KeyRange::new(Bound::Included(key(b"m")), Bound::Unbounded),
        ];
        let joined = join_ranges(&tiles).unwrap();
        assert_eq!(joined.left(), &key(b"a"));
        assert_eq!(joined.right(), &RightBound::Unbounded);

        let beyond = [
            KeyRange::new(Bound::Included(key(b"a")), Bound::Unbounded),
            range(b"m", b"z"),
        ];
        assert_eq!(join_ranges(&beyond), Err(JoinError::BadJoin));
    }

    #[test]
    fn regions_join_into_bounding_rectangle() {
        let inner = range(b"Alpha", b"Beta");
        let thirds = [
            HashRegion::new(0, 10, inner),
            HashRegion::new(10, 20, inner),
            HashRegion::new(20, 30, inner),
        ];
        assert_eq!(join_regions(&thirds), Ok(HashRegion::new(0, 30, inner)));
    }

    #[test]
    fn region_join_reports_gaps_and_overlaps() {
        let inner = range(b"Alpha", b"Beta");
        let gap = [HashRegion::new(0, 10, inner), HashRegion::new(20, 30, inner)];
        assert_eq!(join_regions(&gap), Err(JoinError::BadRegion));

        let overlap = [HashRegion::new(0, 20, inner), HashRegion::new(10, 30, inner)];
        assert_eq!(join_regions(&overlap), Err(JoinError::BadJoin));

        // A region set with both defects still reads as an overlap.
        let both = [
            HashRegion::new(0, 20, inner),
            HashRegion::new(10, 30, inner),
            HashRegion::new(40, 50, inner),
        ];
        assert_eq!(join_regions(&both), Err(JoinError::BadJoin));
    }

    #[test]
    fn region_join_edge_inputs() {
        assert_eq!(join_regions(&[]), Ok(HashRegion::empty()));
        assert_eq!(
            join_regions(&[HashRegion::empty(); 4]),
            Ok(HashRegion::empty())
        );

        let lone = HashRegion::new(3, 9, range(b"a", b"b"));
        assert_eq!(join_regions(&[lone]), Ok(lone));
    }
}
