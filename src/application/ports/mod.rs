// src/application/ports/mod.rs
pub mod email;
pub mod time;
pub mod util;
pub mod verification;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type EmailSenderPort = dyn email::EmailSender;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type HumanVerifierPort = dyn verification::HumanVerifier;
