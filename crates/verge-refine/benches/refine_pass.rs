//! Benchmark for the refinement pass on a fan-triangulated disk.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use verge_graph::{Graph, NodeId, Point3};
use verge_refine::{refine, RefineHooks};

/// Splits every edge longer than `threshold` at its midpoint.
struct MidpointHooks {
    threshold: f64,
}

impl RefineHooks<Graph> for MidpointHooks {
    fn score(&self, graph: &Graph, edge: NodeId) -> f64 {
        let far = graph.edge_mate(edge);
        (graph.coord(far) - graph.coord(edge)).norm() - self.threshold
    }

    fn split(&mut self, graph: &mut Graph, edge: NodeId) -> Option<(NodeId, NodeId)> {
        let far = graph.edge_mate(edge);
        let mid = Point3::from((graph.coord(edge).coords + graph.coord(far).coords) * 0.5);
        Some(graph.split_edge(edge, mid))
    }

    fn on_join(
        &mut self,
        _graph: &mut Graph,
        _old_a: NodeId,
        _old_b: NodeId,
        _new_a: NodeId,
        _new_b: NodeId,
    ) {
    }
}

/// Regular n-gon of radius 10 fan-triangulated from one rim vertex, outer
/// face marked exterior.
fn fan_disk(segments: usize) -> Graph {
    let mut graph = Graph::new();
    let points: Vec<Point3> = (0..segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * std::f64::consts::TAU;
            Point3::new(10.0 * angle.cos(), 10.0 * angle.sin(), 0.0)
        })
        .collect();
    let seed = graph.make_loop(&points).unwrap();
    graph.set_exterior_around_face(graph.edge_mate(seed));
    let mut apex = seed;
    while graph.face_loop_len(apex) > 3 {
        let target = graph.face_succ(graph.face_succ(apex));
        let (next_apex, _) = graph.join(apex, target);
        apex = next_apex;
    }
    graph
}

fn bench_refine_pass(c: &mut Criterion) {
    for segments in [16usize, 64, 256] {
        c.bench_function(&format!("refine_fan_{segments}"), |b| {
            b.iter_batched(
                || fan_disk(segments),
                |mut graph| {
                    let mut hooks = MidpointHooks { threshold: 1.0 };
                    black_box(refine(&mut graph, &mut hooks))
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_refine_pass);
criterion_main!(benches);
