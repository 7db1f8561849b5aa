pub mod analyze_dataset;
pub mod anomaly_detector;
pub mod bias_analyzer;
pub mod insight_generator;
pub mod isolation_forest;
pub mod profiler;
pub mod quality_scorer;
pub mod visualization_builder;
