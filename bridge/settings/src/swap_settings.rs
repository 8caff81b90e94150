use {
    crate::{RouterConfig, SettingsError, SettingsResult},
    bridge_math::AmountScaler,
    bridge_types::{SwapConfigForm, Underlying},
};

/// Reads and writes the swap config of one underlying token on one chain.
///
/// The form holds human units; conversion to and from the contract's base
/// units happens on load and submit.
pub struct SwapSettings<'a, C> {
    contract: &'a C,
    scaler: AmountScaler,
    chain_id: u64,
    underlying: Underlying,
    pending: bool,
    pub form: SwapConfigForm,
}

impl<'a, C> SwapSettings<'a, C>
where
    C: RouterConfig + Sync,
{
    pub fn new(contract: &'a C, scaler: AmountScaler, chain_id: u64, underlying: Underlying) -> Self {
        Self {
            contract,
            scaler,
            chain_id,
            underlying,
            pending: false,
            form: SwapConfigForm::default(),
        }
    }

    pub fn underlying(&self) -> &Underlying {
        &self.underlying
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replaces the form with the swap config currently stored on the
    /// contract.
    pub async fn load(&mut self) -> SettingsResult<()> {
        if !self.underlying.has_name() {
            return Err(SettingsError::MissingUnderlying);
        }

        let config = self
            .contract
            .get_swap_config(&self.underlying.name, self.chain_id)
            .await
            .map_err(SettingsError::contract)?;

        tracing::debug!(
            token = %self.underlying.name,
            chain_id = self.chain_id,
            ?config,
            "Loaded swap config"
        );

        self.form = SwapConfigForm::from_swap_config(&config, &self.scaler);

        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        !self.pending && self.underlying.has_name() && self.form.is_complete()
    }

    /// Converts the form and writes it to the contract.
    pub async fn submit(&mut self) -> SettingsResult<()> {
        if !self.can_submit() {
            tracing::warn!(token = %self.underlying.name, "Refusing to submit swap config");
            return Err(SettingsError::CannotSubmit);
        }

        let config = self.form.to_swap_config(&self.scaler)?;

        let pending = Pending::set(&mut self.pending);

        let result = self
            .contract
            .set_swap_config(&self.underlying.name, self.chain_id, config)
            .await
            .map_err(SettingsError::contract);

        drop(pending);

        match &result {
            Ok(()) => tracing::info!(
                token = %self.underlying.name,
                chain_id = self.chain_id,
                "Swap config set"
            ),
            Err(err) => tracing::error!(
                token = %self.underlying.name,
                chain_id = self.chain_id,
                %err,
                "Failed to set swap config"
            ),
        }

        result
    }
}

/// Holds the pending flag up while alive. Clearing happens on drop, so the
/// flag also comes down when the submitting future is cancelled.
struct Pending<'a>(&'a mut bool);

impl<'a> Pending<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
