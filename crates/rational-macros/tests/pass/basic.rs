use rational_macros::Series;

#[derive(Debug, Clone, Copy, PartialEq, Series)]
pub struct TestSample {
    pub time: f64,
    pub rainfall: f64,
    pub flow: f64,
}

fn main() {
    let s = TestSample { time: 5.0, rainfall: 0.4, flow: 12.0 };
    let mut series = TestSampleSeries::with_capacity(10);
    assert!(series.is_empty());
    series.push(&s);
    assert_eq!(series.len(), 1);
    assert_eq!(series.flow, vec![12.0]);
    assert_eq!(series.row(0), Some(s));
    assert_eq!(series.row(1), None);
    assert_eq!(TestSample::field_names(), &["time", "rainfall", "flow"]);
}
