use std::time::{Duration, Instant};
use strata::graph::Size;
use strata::{LayoutEngine, LayoutOptions};

#[test]
fn a_hundred_node_chain_lays_out_well_under_100ms() {
    let mut engine = LayoutEngine::new(LayoutOptions::default()).unwrap();
    for i in 0..100 {
        engine.add_node(format!("n{i}"), Size::new(50.0, 30.0)).unwrap();
        if i > 0 {
            engine
                .add_edge(&format!("n{}", i - 1), &format!("n{i}"))
                .unwrap();
        }
    }

    let start = Instant::now();
    let result = engine.layout().unwrap();
    let elapsed = start.elapsed();

    assert_eq!(result.nodes.len(), 100);
    assert_eq!(result.nodes["n99"].y, 99.0 * 50.0 + 20.0);
    assert!(
        elapsed < Duration::from_millis(100),
        "layout took {elapsed:?}"
    );
}
