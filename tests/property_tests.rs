//! Property-based tests over random graphs.

use proptest::prelude::*;

use dogs_ilp_color::color::{checker, CheckerResult, Graph};
use dogs_ilp_color::decode::{canonicalize, decode_solution};
use dogs_ilp_color::heuristic::greedy_coloring;
use dogs_ilp_color::model::{ModelBuilder, nb_constraints, nb_variables};

/// Strategy to generate a graph with 1 to 12 vertices (any upper triangle).
fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1usize..=12).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(any::<bool>(), n), n)
            .prop_map(|m| Graph::from_adjacency_matrix(&m).unwrap())
    })
}

proptest! {
    /// The greedy coloring is always proper and uses exactly k̄ colors.
    #[test]
    fn heuristic_is_proper(g in graph_strategy()) {
        let bound = greedy_coloring(&g);
        prop_assert_eq!(checker(&g, bound.certificate()), CheckerResult::Ok(bound.nb_colors()));
        prop_assert_eq!(bound.certificate().iter().max().map(|c| c + 1), Some(bound.nb_colors()));
    }

    /// The model has n + n·k̄ + m·k̄ rows and (n+1)·k̄ columns.
    #[test]
    fn model_dimensions(g in graph_strategy()) {
        let bound = greedy_coloring(&g);
        let model = ModelBuilder::new(&g, &bound).unwrap().into_model();
        let (n, m, k) = (g.nb_vertices(), g.nb_edges(), bound.nb_colors());
        prop_assert_eq!(model.nb_constraints(), n + n*k + m*k);
        prop_assert_eq!(model.nb_constraints(), nb_constraints(n, m, k));
        prop_assert_eq!(model.a().rows(), model.nb_constraints());
        prop_assert_eq!(model.a().cols(), nb_variables(n, k));
        prop_assert_eq!(model.ub().len(), model.nb_constraints());
    }

    /// Decoding the heuristic's own hint gives its coloring back (up to relabeling).
    #[test]
    fn decode_certificate(g in graph_strategy()) {
        let bound = greedy_coloring(&g);
        let model = ModelBuilder::new(&g, &bound).unwrap().into_model();
        let hint = bound.warm_start_hint();
        prop_assert!(model.is_feasible(&hint, 1e-9));
        let decoded = decode_solution(&hint, g.nb_vertices(), bound.nb_colors()).unwrap();
        prop_assert_eq!(decoded.nb_colors(), bound.nb_colors());
        let (expected, _) = canonicalize(bound.certificate());
        prop_assert_eq!(decoded.colors(), &expected[..]);
    }

    /// Canonical ids are contiguous and appear in first-seen order.
    #[test]
    fn canonical_ids(raw in proptest::collection::vec(any::<usize>(), 0..40)) {
        let (colors, m) = canonicalize(&raw);
        let distinct: std::collections::HashSet<_> = raw.iter().collect();
        prop_assert_eq!(m, distinct.len());
        let mut next = 0;
        for (i, c) in colors.iter().enumerate() {
            prop_assert!(*c <= next);
            if *c == next { next += 1; }
            // same raw color, same canonical id
            for j in 0..i {
                prop_assert_eq!(raw[i] == raw[j], colors[i] == colors[j]);
            }
        }
        prop_assert_eq!(next, m);
    }

    /// Repeated ids drawn from a few arbitrary values keep first-seen order.
    #[test]
    fn canonical_ids_with_repeats(
        values in proptest::collection::vec(any::<usize>(), 1..5),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..40),
    ) {
        let raw:Vec<usize> = picks.iter().map(|i| values[i.index(values.len())]).collect();
        let (colors, m) = canonicalize(&raw);
        let distinct: std::collections::HashSet<_> = raw.iter().collect();
        prop_assert_eq!(m, distinct.len());
        prop_assert!(colors.iter().all(|c| *c < m));
        prop_assert_eq!(colors.first().copied(), raw.first().map(|_| 0));
    }

    /// Building twice gives bit-identical arrays.
    #[test]
    fn model_is_deterministic(g in graph_strategy()) {
        let bound = greedy_coloring(&g);
        let a = ModelBuilder::new(&g, &bound).unwrap().model();
        let b = ModelBuilder::new(&g, &greedy_coloring(&g)).unwrap().model();
        prop_assert_eq!(a, b);
    }
}
