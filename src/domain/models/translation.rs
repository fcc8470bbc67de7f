use crate::domain::models::language::Language;

/// Fixed UI labels shown on the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    SignUp,
    Name,
    Surname,
    PhoneNumber,
    IdNumber,
    Password,
    Next,
}

impl Label {
    pub const ALL: [Label; 7] = [
        Label::SignUp,
        Label::Name,
        Label::Surname,
        Label::PhoneNumber,
        Label::IdNumber,
        Label::Password,
        Label::Next,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Label::SignUp => "signUp",
            Label::Name => "name",
            Label::Surname => "surname",
            Label::PhoneNumber => "phoneNumber",
            Label::IdNumber => "idNumber",
            Label::Password => "password",
            Label::Next => "next",
        }
    }

    pub fn source_text(self) -> &'static str {
        match self {
            Label::SignUp => "Sign Up",
            Label::Name => "Name",
            Label::Surname => "Surname",
            Label::PhoneNumber => "Phone Number",
            Label::IdNumber => "ID Number",
            Label::Password => "Password",
            Label::Next => "Next",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBundle {
    pub language: Language,
    pub sign_up: String,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub id_number: String,
    pub password: String,
    pub next: String,
}

impl TranslationBundle {
    /// The untranslated English labels.
    pub fn source() -> Self {
        Self::with_language(Language::SOURCE)
    }

    fn with_language(language: Language) -> Self {
        TranslationBundle {
            language,
            sign_up: Label::SignUp.source_text().to_owned(),
            name: Label::Name.source_text().to_owned(),
            surname: Label::Surname.source_text().to_owned(),
            phone_number: Label::PhoneNumber.source_text().to_owned(),
            id_number: Label::IdNumber.source_text().to_owned(),
            password: Label::Password.source_text().to_owned(),
            next: Label::Next.source_text().to_owned(),
        }
    }

    /// Labels missing from `texts` keep their English source text.
    pub fn assemble(language: Language, texts: impl IntoIterator<Item = (Label, String)>) -> Self {
        let mut bundle = Self::with_language(language);

        for (label, text) in texts {
            *bundle.slot(label) = text;
        }

        bundle
    }

    pub fn get(&self, label: Label) -> &str {
        match label {
            Label::SignUp => &self.sign_up,
            Label::Name => &self.name,
            Label::Surname => &self.surname,
            Label::PhoneNumber => &self.phone_number,
            Label::IdNumber => &self.id_number,
            Label::Password => &self.password,
            Label::Next => &self.next,
        }
    }

    fn slot(&mut self, label: Label) -> &mut String {
        match label {
            Label::SignUp => &mut self.sign_up,
            Label::Name => &mut self.name,
            Label::Surname => &mut self.surname,
            Label::PhoneNumber => &mut self.phone_number,
            Label::IdNumber => &mut self.id_number,
            Label::Password => &mut self.password,
            Label::Next => &mut self.next,
        }
    }
}
