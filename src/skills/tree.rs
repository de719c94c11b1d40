use std::collections::HashMap;

use egui::{epaint::CubicBezierShape, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, Vec2};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use super::SkillBranch;
use crate::views::style;

/// Horizontal step per tree level.
const ROW_DIST: f32 = 115.0;
/// Vertical step between sibling leaves.
const COL_DIST: f32 = 26.0;
const NODE_RADIUS: f32 = 5.0;
const LABEL_GAP: f32 = 8.0;

/// The static skill hierarchy laid out left-to-right with a tidy-tree
/// placement: leaves get consecutive columns, parents sit centered
/// beside the span of their children.
pub struct TreeDiagram {
    g: StableGraph<&'static str, (), Directed>,
    positions: HashMap<NodeIndex, Pos2>,
    size: Vec2,
}

impl TreeDiagram {
    pub fn new(root: &SkillBranch) -> Self {
        let mut g = StableGraph::default();
        let root_idx = add_branch(&mut g, root);

        let mut positions = HashMap::new();
        let mut max_col = 0usize;
        let mut max_row = 0usize;
        place(
            &g,
            root_idx,
            0,
            0,
            &mut positions,
            &mut max_col,
            &mut max_row,
        );

        let size = Vec2::new(
            (max_row as f32) * ROW_DIST + 160.0,
            (max_col as f32 + 1.0) * COL_DIST,
        );
        Self { g, positions, size }
    }

    pub fn node_count(&self) -> usize {
        self.g.node_count()
    }

    pub fn position(&self, idx: NodeIndex) -> Option<Pos2> {
        self.positions.get(&idx).copied()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn show(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(self.size, Sense::hover());
        let painter = ui.painter_at(rect);
        let origin = rect.min + Vec2::new(16.0, COL_DIST * 0.5);

        let link_stroke = Stroke::new(1.5, style::COLOR_ACCENT_SOFT);
        for edge in self.g.edge_indices() {
            let Some((a, b)) = self.g.edge_endpoints(edge) else {
                continue;
            };
            let (Some(pa), Some(pb)) = (self.positions.get(&a), self.positions.get(&b)) else {
                continue;
            };
            let from = origin + pa.to_vec2();
            let to = origin + pb.to_vec2();
            let mid_x = (from.x + to.x) * 0.5;
            painter.add(CubicBezierShape::from_points_stroke(
                [
                    from,
                    Pos2::new(mid_x, from.y),
                    Pos2::new(mid_x, to.y),
                    to,
                ],
                false,
                Color32::TRANSPARENT,
                link_stroke,
            ));
        }

        for idx in self.g.node_indices() {
            let Some(p) = self.positions.get(&idx) else {
                continue;
            };
            let at = origin + p.to_vec2();
            painter.circle_filled(at, NODE_RADIUS, style::COLOR_ACCENT);
            painter.text(
                at + Vec2::new(NODE_RADIUS + LABEL_GAP, 0.0),
                Align2::LEFT_CENTER,
                self.g[idx],
                FontId::proportional(12.0),
                style::COLOR_TEXT,
            );
        }
    }
}

fn add_branch(
    g: &mut StableGraph<&'static str, (), Directed>,
    branch: &SkillBranch,
) -> NodeIndex {
    let idx = g.add_node(branch.name);
    for child in branch.children {
        let child_idx = add_branch(g, child);
        g.add_edge(idx, child_idx, ());
    }
    idx
}

/// Recursive placement: children are laid out first so the parent can
/// center itself beside their span. Returns the widest column used by
/// the subtree.
fn place(
    g: &StableGraph<&'static str, (), Directed>,
    idx: NodeIndex,
    row: usize,
    start_col: usize,
    positions: &mut HashMap<NodeIndex, Pos2>,
    max_col: &mut usize,
    max_row: &mut usize,
) -> usize {
    let children: Vec<NodeIndex> = g
        .neighbors_directed(idx, petgraph::Direction::Outgoing)
        .collect();

    let mut span_end = start_col;
    let mut child_col = start_col;
    // petgraph iterates neighbors in reverse insertion order; flip back
    // so siblings keep their declaration order top-to-bottom.
    for child in children.iter().rev() {
        let child_max = place(g, *child, row + 1, child_col, positions, max_col, max_row);
        span_end = span_end.max(child_max);
        child_col = child_max + 1;
    }

    let col = if children.is_empty() {
        start_col
    } else {
        (start_col + span_end) / 2
    };

    positions.insert(
        idx,
        Pos2::new((row as f32) * ROW_DIST, (col as f32) * COL_DIST),
    );
    *max_col = (*max_col).max(span_end);
    *max_row = (*max_row).max(row);
    span_end
}
