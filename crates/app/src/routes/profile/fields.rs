//! Per-role profile form layout and conversion to update requests.

use serde_json::Value;
use shared_types::{
    AdminProfileUpdate, AppError, ClubProfileUpdate, CoachProfileUpdate, ImageKind,
    PartnerProfileUpdate, PlayerProfileUpdate, ProfileUpdate, Role, StateProfileUpdate,
};
use std::collections::{BTreeMap, HashMap};

/// Field name to the text currently in its input.
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

const fn field(
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        input_type,
        placeholder,
    }
}

const EMAIL: FieldSpec = field("email", "Email", "email", "contact@example.mx");
const PHONE: FieldSpec = field("phone", "Phone", "tel", "+52 33 1234 5678");
const RFC: FieldSpec = field("rfc", "RFC", "text", "ABC123456XYZ");
const WEBSITE: FieldSpec = field("website", "Website", "url", "https://");
const ADDRESS: FieldSpec = field("address", "Address", "text", "");
const PRESIDENT: FieldSpec = field("president_name", "President", "text", "");

const ADMIN_FIELDS: &[FieldSpec] = &[field("name", "Name", "text", ""), EMAIL];

const PLAYER_FIELDS: &[FieldSpec] = &[
    field("first_name", "First name", "text", ""),
    field("last_name", "Last name", "text", ""),
    EMAIL,
    PHONE,
    field("birth_date", "Birth date", "date", ""),
    field("gender", "Gender", "text", ""),
    field("position", "Position", "text", ""),
];

const COACH_FIELDS: &[FieldSpec] = &[
    field("first_name", "First name", "text", ""),
    field("last_name", "Last name", "text", ""),
    EMAIL,
    PHONE,
    field("certification_level", "Certification level", "text", ""),
    field("specialty", "Specialty", "text", ""),
    field("years_experience", "Years of experience", "number", "0"),
];

const CLUB_FIELDS: &[FieldSpec] = &[
    field("name", "Club name", "text", ""),
    RFC,
    EMAIL,
    PHONE,
    WEBSITE,
    ADDRESS,
    PRESIDENT,
];

const PARTNER_FIELDS: &[FieldSpec] = &[
    field("company_name", "Company name", "text", ""),
    field("contact_name", "Contact name", "text", ""),
    EMAIL,
    PHONE,
    RFC,
    WEBSITE,
];

const STATE_FIELDS: &[FieldSpec] = &[
    field("name", "Committee name", "text", ""),
    PRESIDENT,
    EMAIL,
    PHONE,
    RFC,
    WEBSITE,
    ADDRESS,
];

/// Text inputs shown on `role`'s profile form, in display order.
pub fn specs(role: Role) -> &'static [FieldSpec] {
    match role {
        Role::Admin => ADMIN_FIELDS,
        Role::Player => PLAYER_FIELDS,
        Role::Coach => COACH_FIELDS,
        Role::Club => CLUB_FIELDS,
        Role::Partner => PARTNER_FIELDS,
        Role::State => STATE_FIELDS,
    }
}

/// The uploadable image for a role and the field its URL is stored in.
pub fn image_field(role: Role) -> Option<(ImageKind, &'static str)> {
    match role {
        Role::Admin => None,
        Role::Player | Role::Coach => Some((ImageKind::Photo, "photo_url")),
        Role::Club | Role::Partner | Role::State => Some((ImageKind::Logo, "logo_url")),
    }
}

/// Form contents for a profile record. Missing and null values become empty
/// strings; numbers are shown as written.
pub fn initial_values(role: Role, profile: &Value) -> FormValues {
    let image = image_field(role).map(|(_, name)| name);
    specs(role)
        .iter()
        .map(|spec| spec.name)
        .chain(image)
        .map(|name| {
            let text = match profile.get(name) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Bool(b)) => b.to_string(),
                _ => String::new(),
            };
            (name.to_string(), text)
        })
        .collect()
}

/// Build the partial update from the fields the user changed.
///
/// Returns `Ok(None)` when nothing changed. A field emptied by the user is
/// sent as a clear; required fields then fail validation.
pub fn build_update(
    role: Role,
    baseline: &FormValues,
    current: &FormValues,
) -> Result<Option<ProfileUpdate>, AppError> {
    let changed = |name: &str| -> Option<String> {
        let now = current.get(name).map(|v| v.trim()).unwrap_or("");
        let before = baseline.get(name).map(|v| v.trim()).unwrap_or("");
        (now != before).then(|| now.to_string())
    };

    let update = match role {
        Role::Admin => ProfileUpdate::Admin(AdminProfileUpdate {
            name: changed("name"),
            email: changed("email"),
        }),
        Role::Player => ProfileUpdate::Player(PlayerProfileUpdate {
            first_name: changed("first_name"),
            last_name: changed("last_name"),
            email: changed("email"),
            phone: changed("phone"),
            birth_date: changed("birth_date"),
            gender: changed("gender"),
            position: changed("position"),
            photo_url: changed("photo_url"),
        }),
        Role::Coach => {
            // a count cannot be cleared, so an emptied input is left alone
            let years_experience = match changed("years_experience").filter(|t| !t.is_empty()) {
                Some(text) => Some(text.parse::<i32>().map_err(|_| {
                    let mut field_errors = HashMap::new();
                    field_errors.insert(
                        "years_experience".to_string(),
                        "Enter a whole number".to_string(),
                    );
                    AppError::validation("Please fix the highlighted fields", field_errors)
                })?),
                None => None,
            };
            ProfileUpdate::Coach(CoachProfileUpdate {
                first_name: changed("first_name"),
                last_name: changed("last_name"),
                email: changed("email"),
                phone: changed("phone"),
                certification_level: changed("certification_level"),
                specialty: changed("specialty"),
                years_experience,
                photo_url: changed("photo_url"),
            })
        }
        Role::Club => ProfileUpdate::Club(ClubProfileUpdate {
            name: changed("name"),
            rfc: changed("rfc"),
            email: changed("email"),
            phone: changed("phone"),
            website: changed("website"),
            address: changed("address"),
            president_name: changed("president_name"),
            logo_url: changed("logo_url"),
        }),
        Role::Partner => ProfileUpdate::Partner(PartnerProfileUpdate {
            company_name: changed("company_name"),
            contact_name: changed("contact_name"),
            email: changed("email"),
            phone: changed("phone"),
            rfc: changed("rfc"),
            website: changed("website"),
            logo_url: changed("logo_url"),
        }),
        Role::State => ProfileUpdate::State(StateProfileUpdate {
            name: changed("name"),
            president_name: changed("president_name"),
            email: changed("email"),
            phone: changed("phone"),
            rfc: changed("rfc"),
            website: changed("website"),
            address: changed("address"),
            logo_url: changed("logo_url"),
        }),
    };

    let body = update.to_json()?;
    if body.as_object().is_some_and(|fields| fields.is_empty()) {
        return Ok(None);
    }
    Ok(Some(update))
}
