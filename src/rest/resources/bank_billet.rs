//! Bank billet (boleto) resource.

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::{Outcome, Resource, ResourceError};

resource! {
    /// A bank billet (boleto bancário).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use boleto_simples::rest::Resource;
    /// use boleto_simples::rest::resources::BankBillet;
    ///
    /// let mut billet = BankBillet::find(&client, 42).await?.into_inner();
    /// let outcome = billet.cancel(&client).await?;
    /// if outcome.success() {
    ///     println!("Status: {:?}", billet.get("status"));
    /// }
    /// ```
    pub struct BankBillet {
        element: "bank_billet",
        plural: "bank_billets",
    }
}

impl BankBillet {
    /// Cancels the billet (`PUT bank_billets/<id>/cancel`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] without sending anything if
    /// the billet has no id.
    pub async fn cancel(&mut self, client: &HttpClient) -> Result<Outcome, ResourceError> {
        self.perform(client, "cancel", HttpMethod::Put).await
    }
}
