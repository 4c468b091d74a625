use rational_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
#[series(name = "Hydrograph")]
pub struct FlowSample {
    pub time: f64,
    pub flow: f64,
}

fn main() {
    let series: Hydrograph = (0..4)
        .map(|i| FlowSample { time: i as f64 * 5.0, flow: 1.5 })
        .collect();
    assert_eq!(series.len(), 4);
    assert_eq!(series.time, vec![0.0, 5.0, 10.0, 15.0]);
    assert_eq!(FlowSample::field_names(), &["time", "flow"]);
}
