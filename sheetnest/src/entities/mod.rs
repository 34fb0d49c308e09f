mod job;
mod part;
mod solution;

#[doc(inline)]
pub use job::PackingJob;
#[doc(inline)]
pub use part::PartDemand;
#[doc(inline)]
pub use solution::IN2_PER_FT2;
#[doc(inline)]
pub use solution::PackOutcome;
#[doc(inline)]
pub use solution::PackingResult;
#[doc(inline)]
pub use solution::UnplacedDemand;
