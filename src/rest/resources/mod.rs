//! Boleto Simples REST resources.
//!
//! Every resource is a newtype over [`ResourceData`](crate::rest::ResourceData)
//! declared with [`resource!`](crate::resource), so it gets the full
//! [`Resource`](crate::rest::Resource) API. Types with extra member actions
//! (such as [`BankBillet::cancel`]) add them in their own module.
//!
//! # Available Resources
//!
//! | Type | Path |
//! |------|------|
//! | [`BankBillet`] | `bank_billets` |
//! | [`BankBilletAccount`] | `bank_billet_accounts` |
//! | [`Customer`] | `customers` |
//! | [`CustomerSubscription`] | `customer_subscriptions` |
//! | [`Installment`] | `installments` |
//! | [`Discharge`] | `discharges` |
//! | [`Remittance`] | `remittances` |
//! | [`Transaction`] | `transactions` |
//! | [`Webhook`] | `webhooks` |
//!
//! # Example
//!
//! ```rust,ignore
//! use boleto_simples::rest::Resource;
//! use boleto_simples::rest::resources::Customer;
//!
//! let response = Customer::find(&client, 1).await?;
//! println!("{:?}", response.get("person_name"));
//! ```

/// Declares a resource type backed by [`ResourceData`](crate::rest::ResourceData).
///
/// The type name becomes [`Resource::NAME`](crate::rest::Resource::NAME);
/// `element` and `plural` give the body envelope key and the URL path.
///
/// # Example
///
/// ```rust
/// use boleto_simples::resource;
/// use boleto_simples::rest::Resource;
///
/// resource! {
///     /// A carnê.
///     pub struct Carne {
///         element: "carne",
///         plural: "carnes",
///     }
/// }
///
/// let mut carne = Carne::default();
/// carne.set("id", 3);
/// assert_eq!(Carne::NAME, "Carne");
/// assert_eq!(carne.path(None), "carnes/3");
/// ```
#[macro_export]
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            element: $element:literal,
            plural: $plural:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name($crate::rest::ResourceData);

        impl $crate::rest::Resource for $name {
            const NAME: &'static str = stringify!($name);
            const ELEMENT_NAME: &'static str = $element;
            const ELEMENT_NAME_PLURAL: &'static str = $plural;

            fn from_data(data: $crate::rest::ResourceData) -> Self {
                Self(data)
            }

            fn data(&self) -> &$crate::rest::ResourceData {
                &self.0
            }

            fn data_mut(&mut self) -> &mut $crate::rest::ResourceData {
                &mut self.0
            }
        }

        impl From<$crate::rest::Attributes> for $name {
            fn from(attributes: $crate::rest::Attributes) -> Self {
                <Self as $crate::rest::Resource>::new(attributes)
            }
        }
    };
}

mod bank_billet;

pub use bank_billet::BankBillet;

resource! {
    /// A bank account that bank billets are issued against.
    pub struct BankBilletAccount {
        element: "bank_billet_account",
        plural: "bank_billet_accounts",
    }
}

resource! {
    /// A payer.
    pub struct Customer {
        element: "customer",
        plural: "customers",
    }
}

resource! {
    /// A recurring charge for a customer.
    pub struct CustomerSubscription {
        element: "customer_subscription",
        plural: "customer_subscriptions",
    }
}

resource! {
    /// A billet split into installments (carnê).
    pub struct Installment {
        element: "installment",
        plural: "installments",
    }
}

resource! {
    /// A bank return file.
    pub struct Discharge {
        element: "discharge",
        plural: "discharges",
    }
}

resource! {
    /// A bank remittance file.
    pub struct Remittance {
        element: "remittance",
        plural: "remittances",
    }
}

resource! {
    /// A movement on the account balance.
    pub struct Transaction {
        element: "transaction",
        plural: "transactions",
    }
}

resource! {
    /// A webhook subscription.
    pub struct Webhook {
        element: "webhook",
        plural: "webhooks",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Resource;
    use serde_json::json;

    #[test]
    fn test_names() {
        assert_eq!(Customer::NAME, "Customer");
        assert_eq!(
            CustomerSubscription::ELEMENT_NAME,
            "customer_subscription"
        );
        assert_eq!(Remittance::ELEMENT_NAME_PLURAL, "remittances");
        assert_eq!(BankBilletAccount::ELEMENT_NAME_PLURAL, "bank_billet_accounts");
    }

    #[test]
    fn test_from_attributes() {
        let webhook = Webhook::from(
            json!({"url": "https://example.com/hook"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert!(webhook.is_new());
        assert_eq!(webhook.path(None), "webhooks");
        assert_eq!(webhook.get("url"), Some(&json!("https://example.com/hook")));
    }
}
