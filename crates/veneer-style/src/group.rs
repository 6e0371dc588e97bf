//! Composite layout rules for adjacent component groups.
//!
//! Segmented button rows and stacked nav columns want their members to
//! read as one control: outer corners rounded, inner corners square,
//! shared borders collapsed to a single line. These adjustments are pure
//! geometry, so they live outside the resolution pipeline and rewrite
//! only the corner radii and margins of already-resolved specs.

use serde::Serialize;

use crate::style::{ComponentStyleSpec, CornerRadii, Edges};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Layout rules for one run of `count` adjacent members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupLayout {
    orientation: Orientation,
    count: usize,
    radius: f32,
    border_width: f32,
}

/// Geometry adjustments for the member at one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupItem {
    pub corners: CornerRadii,
    /// Margin on the leading edge (left for horizontal runs, top for
    /// vertical). Negative for every member after the first, so
    /// adjacent borders overlap into a single line.
    pub leading_margin: f32,
    /// Paint order at rest. Earlier members sit above later ones, so
    /// the overlapped border is always the earlier member's.
    pub stack_order: i32,
    /// Paint order while hovered or focused, above every resting member
    /// so the full outline shows.
    pub raised_stack_order: i32,
}

impl GroupLayout {
    pub fn new(orientation: Orientation, count: usize) -> Self {
        Self {
            orientation,
            count,
            radius: 4.0,
            border_width: 1.0,
        }
    }

    /// Overrides the outer corner radius (default 4).
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Overrides the border width used for the overlap (default 1).
    pub fn with_border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Adjustments for the member at `index`. Positions at or past
    /// `count` are clamped to the last slot.
    pub fn item(&self, index: usize) -> GroupItem {
        let index = if self.count == 0 {
            0
        } else {
            index.min(self.count - 1)
        };
        let first = index == 0;
        let last = self.count == 0 || index == self.count - 1;
        let r = self.radius;

        let corners = match (self.orientation, first, last) {
            (_, true, true) => CornerRadii::uniform(r),
            (Orientation::Horizontal, true, false) => CornerRadii {
                top_left: r,
                bottom_left: r,
                ..CornerRadii::ZERO
            },
            (Orientation::Horizontal, false, true) => CornerRadii {
                top_right: r,
                bottom_right: r,
                ..CornerRadii::ZERO
            },
            (Orientation::Vertical, true, false) => CornerRadii {
                top_left: r,
                top_right: r,
                ..CornerRadii::ZERO
            },
            (Orientation::Vertical, false, true) => CornerRadii {
                bottom_left: r,
                bottom_right: r,
                ..CornerRadii::ZERO
            },
            (_, false, false) => CornerRadii::ZERO,
        };

        GroupItem {
            corners,
            leading_margin: if first { 0.0 } else { -self.border_width },
            stack_order: self.count as i32 - index as i32,
            raised_stack_order: self.count as i32 + 1,
        }
    }

    /// Applies the member adjustments for `index` to a resolved spec.
    /// Only corner radii and the leading margin change.
    pub fn apply(&self, index: usize, spec: &mut ComponentStyleSpec) {
        let item = self.item(index);
        spec.metrics.corner_radius = item.corners;
        let mut margin = Edges::ZERO;
        match self.orientation {
            Orientation::Horizontal => margin.left = item.leading_margin,
            Orientation::Vertical => margin.top = item.leading_margin,
        }
        spec.metrics.margin = margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{engine, InteractionState, Variant};
    use crate::variant::ComponentKind;

    #[test]
    fn test_single_member_keeps_all_corners() {
        let layout = GroupLayout::new(Orientation::Horizontal, 1);
        let item = layout.item(0);
        assert_eq!(item.corners, CornerRadii::uniform(4.0));
        assert_eq!(item.leading_margin, 0.0);
    }

    #[test]
    fn test_horizontal_run_rounds_outer_corners_only() {
        let layout = GroupLayout::new(Orientation::Horizontal, 3);

        let first = layout.item(0);
        assert_eq!(first.corners.top_left, 4.0);
        assert_eq!(first.corners.bottom_left, 4.0);
        assert_eq!(first.corners.top_right, 0.0);

        let middle = layout.item(1);
        assert_eq!(middle.corners, CornerRadii::ZERO);

        let last = layout.item(2);
        assert_eq!(last.corners.top_right, 4.0);
        assert_eq!(last.corners.bottom_right, 4.0);
        assert_eq!(last.corners.top_left, 0.0);
    }

    #[test]
    fn test_vertical_run_rounds_top_and_bottom() {
        let layout = GroupLayout::new(Orientation::Vertical, 2);
        let first = layout.item(0);
        assert_eq!(first.corners.top_left, 4.0);
        assert_eq!(first.corners.top_right, 4.0);
        assert_eq!(first.corners.bottom_left, 0.0);
        let last = layout.item(1);
        assert_eq!(last.corners.bottom_left, 4.0);
        assert_eq!(last.corners.top_left, 0.0);
    }

    #[test]
    fn test_borders_overlap_by_one_width() {
        let layout = GroupLayout::new(Orientation::Horizontal, 3).with_border_width(2.0);
        assert_eq!(layout.item(0).leading_margin, 0.0);
        assert_eq!(layout.item(1).leading_margin, -2.0);
        assert_eq!(layout.item(2).leading_margin, -2.0);
    }

    #[test]
    fn test_stack_order_decreases_along_the_run() {
        let layout = GroupLayout::new(Orientation::Horizontal, 3);
        let orders: Vec<i32> = (0..3).map(|i| layout.item(i).stack_order).collect();
        assert_eq!(orders, vec![3, 2, 1]);
        for i in 0..3 {
            assert!(layout.item(i).raised_stack_order > orders[0]);
        }
    }

    #[test]
    fn test_apply_rewrites_geometry_only() {
        let spec = engine()
            .resolve(ComponentKind::Button, Variant::new(), InteractionState::new())
            .unwrap();
        let mut grouped = spec.clone();
        GroupLayout::new(Orientation::Horizontal, 2).apply(1, &mut grouped);

        assert_eq!(grouped.metrics.margin.left, -1.0);
        assert_eq!(grouped.metrics.corner_radius.top_left, 0.0);
        assert_eq!(grouped.metrics.corner_radius.top_right, 4.0);
        assert_eq!(grouped.background, spec.background);
        assert_eq!(grouped.metrics.height, spec.metrics.height);
    }

    #[test]
    fn test_vertical_apply_offsets_top_edge() {
        let spec = engine()
            .resolve(
                ComponentKind::SideNavButton,
                Variant::new(),
                InteractionState::new(),
            )
            .unwrap();
        let mut grouped = spec;
        GroupLayout::new(Orientation::Vertical, 2).apply(1, &mut grouped);
        assert_eq!(grouped.metrics.margin.top, -1.0);
        assert_eq!(grouped.metrics.margin.left, 0.0);
    }
}
