pub mod use_cases;

pub use use_cases::analyze_dataset::AnalyzeDatasetUseCase;
pub use use_cases::anomaly_detector::AnomalyDetector;
pub use use_cases::bias_analyzer::BiasAnalyzer;
pub use use_cases::insight_generator::InsightGenerator;
pub use use_cases::profiler::DescriptiveProfiler;
pub use use_cases::quality_scorer::QualityScorer;
pub use use_cases::visualization_builder::VisualizationBuilder;
