use crate::configuration::BootstrapSettings;

/// Network-initialization routine that consumes the bootstrap settings.
///
/// Implemented by the connection manager. It brings the station up once at
/// start with the static address, joins the access point on the configured
/// channel and polls the link at most [`RetryBudget`] times. Retry spacing is
/// the implementor's choice.
///
/// When [`DebugFlag`] is enabled implementors may log verbosely, but never the
/// value behind [`Secret::expose`].
///
/// [`RetryBudget`]: crate::configuration::RetryBudget
/// [`DebugFlag`]: crate::configuration::DebugFlag
/// [`Secret::expose`]: crate::configuration::Secret::expose
pub trait NetworkBootstrap {
    type Error;

    fn bootstrap(&mut self, settings: &BootstrapSettings<'_>) -> Result<(), Self::Error>;
}
