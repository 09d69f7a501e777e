use super::{FieldKind, FieldSpec, FormSchema, Rule};

pub fn vendor() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("name", "Vendor Name", FieldKind::Text).required("Vendor name is required"),
        FieldSpec::new("contactInfo", "Phone Number", FieldKind::Text),
    ])
}

pub fn category() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("title", "Title", FieldKind::Text).required("Title is required"),
        FieldSpec::new("desc", "Description", FieldKind::Multiline)
            .required("Description is required"),
    ])
}

pub fn product() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("title", "Title", FieldKind::Text).required("Title is required"),
        FieldSpec::new("desc", "Description", FieldKind::Multiline)
            .required("Description is required"),
        FieldSpec::new("size", "Size", FieldKind::Text),
        FieldSpec::new("price", "Price", FieldKind::Number).required("Price is required"),
        FieldSpec::new("quantity", "Quantity", FieldKind::Integer)
            .required("Quantity is required"),
        FieldSpec::new("lowQuantityThreshold", "Low Quantity Threshold", FieldKind::Integer)
            .required("Low Quantity Threshold is required"),
        FieldSpec::new("images", "Images", FieldKind::Images),
    ])
}

/// Stock-in records who received the goods, stock-out who sent them.
pub fn stock_log(person_field: &'static str, person_label: &'static str, person_required: &'static str) -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("productId", "Product", FieldKind::Choice).required("Product is required"),
        FieldSpec::new("vendorId", "Vendor", FieldKind::Choice).required("Vendor is required"),
        FieldSpec::new("warehouse", "Warehouse", FieldKind::Text).required("Warehouse is required"),
        FieldSpec::new("quantity", "Quantity", FieldKind::Integer).required("Quantity is required"),
        FieldSpec::new(person_field, person_label, FieldKind::Text).required(person_required),
        FieldSpec::new("remarks", "Remarks", FieldKind::Multiline),
        FieldSpec::new("images", "Images", FieldKind::Images),
    ])
}

pub fn stock_in() -> FormSchema {
    stock_log("receiverName", "Receiver Name", "Receiver Name is required")
}

pub fn stock_out() -> FormSchema {
    stock_log("senderName", "Sender Name", "Sender Name is required")
}

fn directory(name_field: &'static str, name_label: &'static str, lists: [(&'static str, &'static str); 2]) -> FormSchema {
    let mut fields = vec![
        FieldSpec::new("country", "Country", FieldKind::Choice).required("Country is required"),
        FieldSpec::new("city", "City", FieldKind::Choice).required("City is required"),
        FieldSpec::new(name_field, name_label, FieldKind::Text)
            .required("Name is required"),
        FieldSpec::new("lat", "Latitude", FieldKind::Number),
        FieldSpec::new("lon", "Longitude", FieldKind::Number),
        FieldSpec::new("photo", "Photo", FieldKind::Images),
    ];
    for (name, label) in lists {
        fields.push(FieldSpec::new(name, label, FieldKind::List));
    }
    FormSchema::new(fields)
}

pub fn hospital() -> FormSchema {
    directory(
        "hospitalName",
        "Hospital Name",
        [("departments", "Departments"), ("doctors", "Doctors")],
    )
}

pub fn mall() -> FormSchema {
    directory(
        "shoppingMallName",
        "Shopping Mall Name",
        [("outlets", "Outlets"), ("foodCourts", "Food Courts")],
    )
}

pub fn institute() -> FormSchema {
    let mut schema = directory(
        "institutionName",
        "Institution Name",
        [("departments", "Departments"), ("faculty", "Faculty")],
    );
    schema
        .fields
        .insert(3, FieldSpec::new("institutionType", "Institution Type", FieldKind::Text));
    schema
}

pub fn login() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("email", "Email Address", FieldKind::Email)
            .rule(Rule::Email("Must be a valid email"))
            .rule(Rule::MaxLength(255, "Email must be at most 255 characters"))
            .required("Email is required"),
        FieldSpec::new("password", "Password", FieldKind::Password)
            .rule(Rule::MaxLength(255, "Password must be at most 255 characters"))
            .required("Password is required"),
    ])
}

pub fn sign_up() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("firstName", "First Name", FieldKind::Text).required("First Name is required"),
        FieldSpec::new("lastName", "Last Name", FieldKind::Text).required("Last Name is required"),
        FieldSpec::new("email", "Email Address", FieldKind::Email)
            .rule(Rule::Email("Must be a valid email"))
            .required("Email is required"),
        FieldSpec::new("password", "Password", FieldKind::Password)
            .required("Password is required")
            .rule(Rule::MinLength(6, "Password must be at least 6 characters")),
        FieldSpec::new("role", "Role", FieldKind::Choice).required("Role is required"),
    ])
}

pub fn update_password() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("currentPassword", "Current Password", FieldKind::Password)
            .required("Current Password is required")
            .rule(Rule::MinLength(6, "Password must be at least 6 characters")),
        FieldSpec::new("newPassword", "New Password", FieldKind::Password)
            .required("New Password is required")
            .rule(Rule::MinLength(6, "Password must be at least 6 characters")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ChoiceOptions, FormValues};

    #[test]
    fn vendor_needs_only_a_name() {
        let values = vendor().defaults().with_text("name", "Acme Co");
        assert!(vendor().validate(&values, &ChoiceOptions::new()).is_ok());
    }

    #[test]
    fn vendor_contact_is_free_text() {
        for contact in ["ext. 12", "N/A", "+92 300 1234567"] {
            let values = vendor()
                .defaults()
                .with_text("name", "Acme Co")
                .with_text("contactInfo", contact);
            assert!(vendor().validate(&values, &ChoiceOptions::new()).is_ok(), "{contact}");
        }
    }

    #[test]
    fn login_checks_email_shape() {
        let values = FormValues::new()
            .with_text("email", "not-an-email")
            .with_text("password", "secret");
        let errors = login().validate(&values, &ChoiceOptions::new()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Must be a valid email"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn short_passwords_are_rejected() {
        let values = FormValues::new()
            .with_text("currentPassword", "abc")
            .with_text("newPassword", "longenough");
        let errors = update_password()
            .validate(&values, &ChoiceOptions::new())
            .unwrap_err();
        assert_eq!(errors.get("currentPassword"), Some("Password must be at least 6 characters"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn stock_out_requires_sender() {
        let schema = stock_out();
        assert!(schema.field("senderName").is_some_and(|f| f.is_required()));
        assert!(schema.field("receiverName").is_none());
    }
}
