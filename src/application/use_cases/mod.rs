mod summarize_assessments;

pub use summarize_assessments::SummarizeAssessmentsUseCase;
