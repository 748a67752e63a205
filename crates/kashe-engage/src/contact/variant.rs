//! Form variants and their fields.

use kashe_core::ContactKind;
use serde::{Deserialize, Serialize};

/// A contact form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Products,
    Region,
    Message,
}

impl Field {
    /// Form control name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Products => "products",
            Field::Region => "region",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Company => "Company",
            Field::Products => "Products of Interest",
            Field::Region => "Region/Territory",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FirstName => "John",
            Field::LastName => "Doe",
            Field::Email => "john@company.com",
            Field::Phone => "+1 (555) 000-0000",
            Field::Company => "Your company name",
            Field::Products => "e.g., Engine oils, Transmission fluids",
            Field::Region => "e.g., Northeast USA, Western Europe",
            Field::Message => "Tell us more about your needs...",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }

    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Products,
        Field::Region,
        Field::Message,
    ];
}

/// Which contact form configuration is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Default,
    Quote,
    Distributor,
}

const BASE_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Company,
    Field::Message,
];

const QUOTE_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Company,
    Field::Products,
    Field::Message,
];

const DISTRIBUTOR_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Company,
    Field::Region,
    Field::Message,
];

impl FormVariant {
    /// Variant for a `type` query value; unknown values give `Default`.
    pub fn from_query(value: Option<&str>) -> Self {
        ContactKind::from_query(value).into()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormVariant::Default => "default",
            FormVariant::Quote => "quote",
            FormVariant::Distributor => "distributor",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormVariant::Default => "Get in Touch",
            FormVariant::Quote => "Request a Quote",
            FormVariant::Distributor => "Find a Distributor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormVariant::Default => {
                "Have a question or want to learn more? We'd love to hear from you."
            }
            FormVariant::Quote => {
                "Tell us about your requirements and we'll provide a customized quote."
            }
            FormVariant::Distributor => {
                "Looking to become a distributor? Let's discuss partnership opportunities."
            }
        }
    }

    /// Fields shown, in form order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormVariant::Default => BASE_FIELDS,
            FormVariant::Quote => QUOTE_FIELDS,
            FormVariant::Distributor => DISTRIBUTOR_FIELDS,
        }
    }

    pub fn is_required(&self, field: Field) -> bool {
        match field {
            Field::FirstName | Field::LastName | Field::Email | Field::Message => true,
            Field::Phone | Field::Company => false,
            Field::Products => *self == FormVariant::Quote,
            Field::Region => *self == FormVariant::Distributor,
        }
    }

    /// Required fields, in form order.
    pub fn required_fields(&self) -> Vec<Field> {
        self.fields()
            .iter()
            .copied()
            .filter(|f| self.is_required(*f))
            .collect()
    }
}

impl From<ContactKind> for FormVariant {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::General => FormVariant::Default,
            ContactKind::Quote => FormVariant::Quote,
            ContactKind::Distributor => FormVariant::Distributor,
        }
    }
}

impl From<FormVariant> for ContactKind {
    fn from(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Default => ContactKind::General,
            FormVariant::Quote => ContactKind::Quote,
            FormVariant::Distributor => ContactKind::Distributor,
        }
    }
}
