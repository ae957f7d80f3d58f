pub mod study_prompts;
