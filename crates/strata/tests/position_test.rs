use strata::graph::{Graph, Size};
use strata::order::order_nodes;
use strata::position::assign_coordinates;
use strata::rank::assign_ranks;
use strata::{Bounds, LayoutError, LayoutOptions, OrderingMap, PositionedNode, Positions, RankDir};

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

fn pos(x: f64, y: f64, width: f64, height: f64) -> PositionedNode {
    PositionedNode {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn top_to_bottom_stacks_ranks_vertically() {
    let g = fan_out();
    let positions = place(&g, &LayoutOptions::default());

    assert_eq!(positions["A"], pos(20.0, 20.0, 100.0, 50.0));
    assert_eq!(positions["B"], pos(20.0, 70.0, 100.0, 50.0));
    assert_eq!(positions["C"], pos(160.0, 70.0, 60.0, 30.0));
    assert_eq!(positions["B"].y, positions["C"].y);
}

#[test]
fn left_to_right_stacks_ranks_horizontally() {
    let g = fan_out();
    let opts = LayoutOptions {
        rankdir: RankDir::LR,
        ..Default::default()
    };
    let positions = place(&g, &opts);

    assert_eq!(positions["A"], pos(20.0, 20.0, 100.0, 50.0));
    assert_eq!(positions["B"], pos(70.0, 20.0, 100.0, 50.0));
    // LR spreads a rank along y, so the step is the node height.
    assert_eq!(positions["C"], pos(70.0, 110.0, 60.0, 30.0));
    assert_eq!(positions["B"].x, positions["C"].x);
}

#[test]
fn margins_and_spacing_come_from_the_options() {
    let g = fan_out();
    let opts = LayoutOptions {
        nodesep: 10.0,
        ranksep: 100.0,
        marginx: 5.0,
        marginy: 7.0,
        ..Default::default()
    };
    let positions = place(&g, &opts);

    assert_eq!((positions["A"].x, positions["A"].y), (5.0, 7.0));
    assert_eq!((positions["B"].x, positions["B"].y), (5.0, 107.0));
    assert_eq!((positions["C"].x, positions["C"].y), (115.0, 107.0));
    for n in positions.values() {
        assert!(n.x >= opts.marginx && n.y >= opts.marginy);
    }
}

#[test]
fn assign_coordinates_is_pure() {
    let g = fan_out();
    let ranks = assign_ranks(&g);
    let ordering = order_nodes(&g, &ranks);
    let opts = LayoutOptions::default();
    assert_eq!(
        assign_coordinates(&g, &ordering, &opts).unwrap(),
        assign_coordinates(&g, &ordering, &opts).unwrap()
    );
}

#[test]
fn unknown_ids_in_the_ordering_are_reported() {
    let g = fan_out();
    let mut ordering = OrderingMap::new();
    ordering.insert(0, vec!["A".to_string(), "ghost".to_string()]);

    let err = assign_coordinates(&g, &ordering, &LayoutOptions::default()).unwrap_err();
    assert!(matches!(err, LayoutError::UnknownNode { ref id } if id == "ghost"));
}

#[test]
fn bounds_add_trailing_margins_to_the_far_corner() {
    let g = fan_out();
    let opts = LayoutOptions::default();
    let positions = place(&g, &opts);

    let bounds = Bounds::of(&positions, &opts);
    assert_eq!(
        bounds,
        Bounds {
            width: 240.0,
            height: 140.0
        }
    );
}

#[test]
fn bounds_of_nothing_is_zero() {
    let bounds = Bounds::of(&Positions::new(), &LayoutOptions::default());
    assert_eq!(bounds, Bounds::default());
}
