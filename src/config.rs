/// Session settings. There are no flags or files; these are the built-in defaults.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionConfig {
    /// Printed in front of every monetary figure.
    pub currency_symbol: String,
    /// Fractional digits accepted on monetary input and kept on results.
    pub dec_places: u32,
    /// Show the menu again after a result instead of ending the session.
    pub return_to_menu: bool,
}

impl SessionConfig {
    pub fn new(currency_symbol: &str, dec_places: u32, return_to_menu: bool) -> Self {
        Self {
            currency_symbol: currency_symbol.to_string(),
            dec_places,
            return_to_menu,
        }
    }

    pub fn format_money(&self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol,
            self.dec_places as usize,
            amount
        )
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("£", 2, true)
    }
}
