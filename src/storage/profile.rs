//! The user's own profile and phone contacts

/// Profile card of the signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub display_name: String,
    pub handle: String,
    pub initials: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub status: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            display_name: "Мой Профиль".to_string(),
            handle: "@my_profile".to_string(),
            initials: "МП".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            email: "myprofile@example.com".to_string(),
            location: "Москва, Россия".to_string(),
            status: "Доступен для звонков и сообщений 🚀".to_string(),
        }
    }
}

/// A contact imported from the phone book
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneContact {
    pub name: String,
    pub phone: String,
    pub synced: bool,
}

impl PhoneContact {
    fn new(name: &str, phone: &str, synced: bool) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            synced,
        }
    }

    /// First letter of each word
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Phone book as loaded on startup
pub fn seed_contacts() -> Vec<PhoneContact> {
    vec![
        PhoneContact::new("Анна Иванова", "+7 999 111-11-11", true),
        PhoneContact::new("Дмитрий Петров", "+7 999 222-22-22", true),
        PhoneContact::new("Елена Смирнова", "+7 999 333-33-33", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_initials() {
        let contacts = seed_contacts();
        assert_eq!(contacts[0].initials(), "АИ");
        assert_eq!(contacts[2].initials(), "ЕС");
    }

    #[test]
    fn test_one_contact_starts_unsynced() {
        let unsynced: Vec<_> = seed_contacts().into_iter().filter(|c| !c.synced).collect();
        assert_eq!(unsynced.len(), 1);
        assert_eq!(unsynced[0].name, "Елена Смирнова");
    }
}
