//! Two-step registration wizard.
//!
//! DESIGN
//! ======
//! Step one collects account fields and the role; step two uses a profile
//! schema picked by that role. The wizard owns both drafts so going back keeps
//! what the user typed, and switching role discards the other role's profile.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::types::{RegisterProfile, RegisterRequest, Role};
use crate::util::validation::{FieldErrors, MIN_PASSWORD_LEN};

/// Step-one draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Candidate,
        }
    }
}

impl AccountForm {
    /// Account schema.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when any rule fails.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("name", &self.name, "Name is required.");
        errors.email("email", &self.email);
        errors.min_len(
            "password",
            &self.password,
            MIN_PASSWORD_LEN,
            "Password must be at least 8 characters.",
        );
        if self.confirm_password != self.password {
            errors.add("confirmPassword", "Passwords do not match.");
        }
        if self.role == Role::Admin {
            errors.add("role", "Choose job seeker or employer.");
        }
        errors.finish(|| ())
    }
}

/// Candidate profile draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateProfileForm {
    pub headline: String,
    pub location: String,
}

/// Employer profile draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployerProfileForm {
    pub company_name: String,
    pub company_website: String,
}

/// Step-two draft; the variant is the role chosen in step one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileForm {
    Candidate(CandidateProfileForm),
    Employer(EmployerProfileForm),
}

impl ProfileForm {
    /// Empty profile for `role`. Admins get the candidate form; step one
    /// rejects that role before step two is reachable.
    #[must_use]
    pub fn blank(role: Role) -> Self {
        match role {
            Role::Employer => Self::Employer(EmployerProfileForm::default()),
            Role::Candidate | Role::Admin => Self::Candidate(CandidateProfileForm::default()),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Candidate(_) => Role::Candidate,
            Self::Employer(_) => Role::Employer,
        }
    }

    /// Role-specific profile schema.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when any rule fails.
    pub fn validate(&self) -> Result<RegisterProfile, FieldErrors> {
        let mut errors = FieldErrors::new();
        match self {
            Self::Candidate(form) => {
                errors.required("headline", &form.headline, "Headline is required.");
                errors.required("location", &form.location, "Location is required.");
                errors.finish(|| RegisterProfile::Candidate {
                    headline: form.headline.trim().to_owned(),
                    location: form.location.trim().to_owned(),
                })
            }
            Self::Employer(form) => {
                errors.required("companyName", &form.company_name, "Company name is required.");
                errors.url("companyWebsite", &form.company_website);
                errors.finish(|| RegisterProfile::Employer {
                    company_name: form.company_name.trim().to_owned(),
                    company_website: form.company_website.trim().to_owned(),
                })
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Account,
    Profile,
}

/// Wizard state across both steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationWizard {
    step: WizardStep,
    account: AccountForm,
    profile: ProfileForm,
    errors: FieldErrors,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    #[must_use]
    pub fn new() -> Self {
        let account = AccountForm::default();
        let profile = ProfileForm::blank(account.role);
        Self { step: WizardStep::Account, account, profile, errors: FieldErrors::new() }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn account(&self) -> &AccountForm {
        &self.account
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileForm {
        &self.profile
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Edit the step-one draft. A role change resets the profile draft.
    pub fn update_account(&mut self, edit: impl FnOnce(&mut AccountForm)) {
        edit(&mut self.account);
        if self.profile.role() != self.account.role && self.account.role != Role::Admin {
            self.profile = ProfileForm::blank(self.account.role);
        }
    }

    /// Edit the step-two draft.
    pub fn update_profile(&mut self, edit: impl FnOnce(&mut ProfileForm)) {
        let role = self.profile.role();
        edit(&mut self.profile);
        if self.profile.role() != role {
            // The profile kind is fixed by step one.
            self.profile = ProfileForm::blank(role);
        }
    }

    /// Validate step one and advance. Returns whether the step changed.
    pub fn submit_account(&mut self) -> bool {
        match self.account.validate() {
            Ok(()) => {
                if self.profile.role() != self.account.role {
                    self.profile = ProfileForm::blank(self.account.role);
                }
                self.errors = FieldErrors::new();
                self.step = WizardStep::Profile;
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Validate step two with the role's schema and build the request.
    pub fn submit_profile(&mut self) -> Option<RegisterRequest> {
        if self.step != WizardStep::Profile {
            return None;
        }
        match self.profile.validate() {
            Ok(profile) => {
                self.errors = FieldErrors::new();
                Some(RegisterRequest {
                    name: self.account.name.trim().to_owned(),
                    email: self.account.email.trim().to_owned(),
                    password: self.account.password.clone(),
                    profile,
                })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Return to step one, keeping both drafts.
    pub fn back(&mut self) {
        self.step = WizardStep::Account;
        self.errors = FieldErrors::new();
    }

    /// Attach a server-side failure to the current step.
    pub fn set_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.add(field, message);
    }
}
