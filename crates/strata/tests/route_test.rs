use strata::graph::{Graph, Size};
use strata::order::order_nodes;
use strata::position::assign_coordinates;
use strata::rank::assign_ranks;
use strata::route::route_edges;
use strata::{LayoutError, LayoutOptions, Point, Positions, RankDir};

fn fan_out() -> Graph {
    let mut g = Graph::new();
    g.add_node("A", Size::new(100.0, 50.0)).unwrap();
    g.add_node("B", Size::new(100.0, 50.0)).unwrap();
    g.add_node("C", Size::new(60.0, 30.0)).unwrap();
    g.add_edge("A", "B").unwrap();
    g.add_edge("A", "C").unwrap();
    g
}

fn place(g: &Graph, opts: &LayoutOptions) -> Positions {
    let ranks = assign_ranks(g);
    let ordering = order_nodes(g, &ranks);
    assign_coordinates(g, &ordering, opts).unwrap()
}

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn top_to_bottom_routes_leave_the_bottom_and_enter_the_top() {
    let g = fan_out();
    let opts = LayoutOptions::default();
    let positions = place(&g, &opts);
    let paths = route_edges(&g, &positions, &opts).unwrap();

    assert_eq!(paths.keys().collect::<Vec<_>>(), vec!["e0", "e1"]);
    assert_eq!(
        paths["e1"].points,
        pts(&[(70.0, 70.0), (70.0, 45.0), (190.0, 45.0), (190.0, 70.0)])
    );
}

#[test]
fn left_to_right_routes_leave_the_right_and_enter_the_left() {
    let g = fan_out();
    let opts = LayoutOptions {
        rankdir: RankDir::LR,
        ..Default::default()
    };
    let positions = place(&g, &opts);
    let paths = route_edges(&g, &positions, &opts).unwrap();

    assert_eq!(
        paths["e1"].points,
        pts(&[(120.0, 45.0), (45.0, 45.0), (45.0, 125.0), (70.0, 125.0)])
    );
}

#[test]
fn duplicate_edges_get_their_own_ids() {
    let mut g = fan_out();
    g.add_edge("A", "B").unwrap();
    let opts = LayoutOptions::default();
    let positions = place(&g, &opts);
    let paths = route_edges(&g, &positions, &opts).unwrap();

    assert_eq!(paths.len(), 3);
    assert_eq!(paths["e0"], paths["e2"]);
}

#[test]
fn every_route_has_four_points_and_is_orthogonal() {
    let g = fan_out();
    for rankdir in [RankDir::TB, RankDir::LR] {
        let opts = LayoutOptions {
            rankdir,
            ..Default::default()
        };
        let positions = place(&g, &opts);
        for path in route_edges(&g, &positions, &opts).unwrap().values() {
            assert_eq!(path.points.len(), 4);
            for seg in path.points.windows(2) {
                assert!(seg[0].x == seg[1].x || seg[0].y == seg[1].y);
            }
        }
    }
}

#[test]
fn route_edges_is_pure() {
    let g = fan_out();
    let opts = LayoutOptions::default();
    let positions = place(&g, &opts);
    assert_eq!(
        route_edges(&g, &positions, &opts).unwrap(),
        route_edges(&g, &positions, &opts).unwrap()
    );
}

#[test]
fn missing_positions_are_reported_with_the_edge_id() {
    let g = fan_out();
    let opts = LayoutOptions::default();
    let mut positions = place(&g, &opts);
    positions.shift_remove("C");

    let err = route_edges(&g, &positions, &opts).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::UnpositionedNode { ref edge, ref id } if edge == "e1" && id == "C"
    ));
}
