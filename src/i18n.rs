//! Display strings for the two supported locales (EN/TR)

use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "TR")]
    Tr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Tr => "TR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EN" => Some(Language::En),
            "TR" => Some(Language::Tr),
            _ => None,
        }
    }
}

/// Message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    EmployeeList,
    AddEmployee,
    Footer,
    FirstName,
    LastName,
    DateOfBirth,
    EmploymentDate,
    Phone,
    Email,
    Department,
    Position,
    Actions,
    Edit,
    Delete,
    EditTitle,
    Cancel,
    Save,
    ConfirmDelete,
    EmployeeAdded,
}

impl Text {
    pub fn translate(self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en(),
            Language::Tr => self.tr(),
        }
    }

    fn en(self) -> &'static str {
        match self {
            Text::EmployeeList => "Employee List",
            Text::AddEmployee => "Add New Employee",
            Text::Footer => "© 2025 ING Employee Portal",
            Text::FirstName => "First Name",
            Text::LastName => "Last Name",
            Text::DateOfBirth => "Date of Birth",
            Text::EmploymentDate => "Employment Date",
            Text::Phone => "Phone",
            Text::Email => "Email",
            Text::Department => "Department",
            Text::Position => "Position",
            Text::Actions => "Actions",
            Text::Edit => "Edit",
            Text::Delete => "Delete",
            Text::EditTitle => "Edit Employee",
            Text::Cancel => "Cancel",
            Text::Save => "Save",
            Text::ConfirmDelete => "Are you sure you want to delete this employee?",
            Text::EmployeeAdded => "Employee added successfully!",
        }
    }

    fn tr(self) -> &'static str {
        match self {
            Text::EmployeeList => "Çalışan Listesi",
            Text::AddEmployee => "Yeni Çalışan Ekle",
            Text::Footer => "© 2025 ING Çalışan Portalı",
            Text::FirstName => "Ad",
            Text::LastName => "Soyad",
            Text::DateOfBirth => "Doğum Tarihi",
            Text::EmploymentDate => "İşe Giriş",
            Text::Phone => "Telefon",
            Text::Email => "E-posta",
            Text::Department => "Departman",
            Text::Position => "Pozisyon",
            Text::Actions => "İşlem",
            Text::Edit => "Düzenle",
            Text::Delete => "Sil",
            Text::EditTitle => "Çalışan Düzenle",
            Text::Cancel => "İptal",
            Text::Save => "Kaydet",
            Text::ConfirmDelete => "Bu çalışanı silmek istediğinize emin misiniz?",
            Text::EmployeeAdded => "Çalışan başarıyla eklendi!",
        }
    }
}
