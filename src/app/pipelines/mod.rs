pub mod tracker_pipeline;
