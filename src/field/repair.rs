use std::collections::BTreeMap;

use geo::{unary_union, BoundingRect, MultiPolygon, Polygon, Rect, Validation};

/// Zero-width repair: a valid polygon is returned as-is, anything else is run
/// through the overlay engine so that self-intersections are split and ring
/// orientation is normalised.
pub(super) fn repair(polygon: &Polygon<f64>) -> MultiPolygon<f64> {
    if polygon.is_valid() {
        return MultiPolygon::new(vec![polygon.clone()]);
    }
    unary_union(std::iter::once(polygon))
}

/// Repair every polygon, then union the results into one region.
///
/// Only polygons whose bounding boxes touch, directly or through a chain of
/// others, are unioned together. Isolated parts pass through unchanged, so a
/// small part far from the rest keeps its exact coordinates.
pub(super) fn union_repaired(polygons: &[Polygon<f64>]) -> MultiPolygon<f64> {
    let repaired = polygons.iter()
        .flat_map(|polygon| repair(polygon).0)
        .collect::<Vec<_>>();

    let parts = touching_groups(&repaired).into_iter()
        .flat_map(|group| match group.as_slice() {
            [single] => vec![(*single).clone()],
            _ => unary_union(group.iter().copied()).0,
        })
        .collect();

    MultiPolygon::new(parts)
}

/// Group polygons into connected components of overlapping bounding boxes.
fn touching_groups(polygons: &[Polygon<f64>]) -> Vec<Vec<&Polygon<f64>>> {
    let boxes = polygons.iter().map(|p| p.bounding_rect()).collect::<Vec<_>>();
    let mut parent = (0..polygons.len()).collect::<Vec<_>>();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            let (Some(a), Some(b)) = (boxes[i], boxes[j]) else { continue };
            if rects_touch(&a, &b) {
                let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
                parent[ri.max(rj)] = ri.min(rj);
            }
        }
    }

    let mut groups = BTreeMap::<usize, Vec<&Polygon<f64>>>::new();
    for (i, polygon) in polygons.iter().enumerate() {
        if boxes[i].is_none() { continue }
        let root = find(&mut parent, i);
        groups.entry(root).or_default().push(polygon);
    }
    groups.into_values().collect()
}

#[inline]
fn rects_touch(a: &Rect<f64>, b: &Rect<f64>) -> bool {
    a.min().x <= b.max().x && b.min().x <= a.max().x
        && a.min().y <= b.max().y && b.min().y <= a.max().y
}
