//! Property-based tests: report ordering under scrambled probe timing and
//! totality of the status parser.

#![allow(clippy::expect_used)]

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use proptest::prelude::*;

use devstack::application::services::stack_status::{StatusReport, gather_status};
use devstack::domain::status::parse_status_line;

use crate::helpers::FakeProber;

fn arb_service_names() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_-]{0,8}", 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Row order equals the byte-sorted name set no matter how enumeration
    /// ordered the services or how long each probe took.
    #[test]
    fn report_order_is_a_function_of_the_name_set(
        names in arb_service_names(),
        mut seed in any::<u64>(),
    ) {
        // Shuffle enumeration order and assign each service a pseudo-random
        // latency from the seed.
        let mut shuffled: Vec<String> = names.iter().cloned().collect();
        let mut latency = HashMap::new();
        for i in (1..shuffled.len()).rev() {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            #[allow(clippy::cast_possible_truncation)]
            let j = (seed >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }
        for name in &shuffled {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            latency.insert(name.clone(), seed % 15);
        }

        let prober = Arc::new(FakeProber {
            services: shuffled.join("\n"),
            latency_ms: latency,
            ..FakeProber::default()
        });

        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let report = runtime.block_on(gather_status(prober)).expect("gather");

        let StatusReport::Services(statuses) = report else {
            panic!("expected a populated report");
        };
        let rendered: Vec<String> = statuses.iter().map(|s| s.name.clone()).collect();
        let expected: Vec<String> = names.iter().cloned().collect();
        prop_assert_eq!(rendered, expected);
        prop_assert_eq!(statuses.len(), names.len());
    }

    /// The parser is total: any input produces a status, never a panic.
    #[test]
    fn parser_never_fails(raw in ".*") {
        let status = parse_status_line("svc", &raw);
        prop_assert_eq!(status.name, "svc");
        prop_assert_eq!(status.running, status.state.starts_with("Up"));
    }

    /// State and ports reassemble into the input when a separator is present.
    #[test]
    fn parser_splits_on_first_separator(state in "[^|]*", ports in ".*") {
        let raw = format!("{state}|{ports}");
        let status = parse_status_line("svc", &raw);
        prop_assert_eq!(status.state, state);
        prop_assert_eq!(status.ports, ports);
    }

    /// Without a separator the whole line is the state.
    #[test]
    fn parser_without_separator_keeps_ports_empty(state in "[^|]*") {
        let status = parse_status_line("svc", &state);
        prop_assert_eq!(status.state, state);
        prop_assert_eq!(status.ports, "");
    }
}
