use {
    bridge_math::{to_ratio, AmountScaler, MathResult, Millionths, ScalerConfig},
    clap::Subcommand,
};

#[derive(Subcommand, Debug)]
pub enum ConvertCmd {
    /// Convert a token amount from human units to base units
    ToBase {
        /// Amount in human units, e.g. 100.5
        amount: String,
        /// Token decimals [default: from config]
        #[arg(long)]
        decimals: Option<u8>,
    },
    /// Convert a token amount from base units to human units
    ToScaled {
        /// Amount in base units
        amount: String,
        /// Token decimals [default: from config]
        #[arg(long)]
        decimals: Option<u8>,
    },
    /// Convert a fee rate from millionths to a plain ratio
    ToRatio {
        /// Integer number of millionths, e.g. 1000
        millionths: String,
    },
    /// Convert a fee rate from a plain ratio to millionths
    ToMillionths {
        /// Plain ratio, e.g. 0.001
        ratio: String,
    },
}

impl ConvertCmd {
    pub fn run(self, cfg: ScalerConfig) -> anyhow::Result<()> {
        println!("{}", self.convert(cfg)?);

        Ok(())
    }

    fn convert(self, cfg: ScalerConfig) -> MathResult<String> {
        let scaler = |decimals: Option<u8>| {
            AmountScaler::new(ScalerConfig {
                decimals: decimals.unwrap_or(cfg.decimals),
                ..cfg
            })
        };

        match self {
            ConvertCmd::ToBase { amount, decimals } => {
                scaler(decimals).to_base(&amount).map(|a| a.to_string())
            },
            ConvertCmd::ToScaled { amount, decimals } => {
                scaler(decimals).to_scaled(&amount).map(|a| a.to_string())
            },
            ConvertCmd::ToRatio { millionths } => {
                let millionths = millionths.parse::<Millionths>()?;
                Ok(to_ratio(millionths).to_string())
            },
            ConvertCmd::ToMillionths { ratio } => {
                scaler(None).to_millionths(&ratio).map(|m| m.to_string())
            },
        }
    }
}

// ----------------------------------- tests -----------------------------------
