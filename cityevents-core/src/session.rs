//! Users registered during this run and which one is selected.

use crate::user::User;

#[derive(Debug, Default)]
pub struct Session {
    users: Vec<User>,
    current: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Add a user and make it the current one.
    pub fn register_user(&mut self, user: User) -> &User {
        self.users.push(user);
        let index = self.users.len() - 1;
        self.current = Some(index);
        &self.users[index]
    }

    /// Select by 1-based position in `users()`. Out of range leaves the
    /// selection unchanged and returns `None`.
    pub fn select_user(&mut self, position: usize) -> Option<&User> {
        let index = position.checked_sub(1).filter(|i| *i < self.users.len())?;
        self.current = Some(index);
        self.users.get(index)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.and_then(|i| self.users.get(i))
    }

    pub fn current_user_mut(&mut self) -> Option<&mut User> {
        self.current.and_then(|i| self.users.get_mut(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(name, &format!("{}@example.com", name.to_lowercase()), "", 0)
    }

    #[test]
    fn starts_without_a_current_user() {
        let session = Session::new();
        assert!(session.current_user().is_none());
        assert!(session.users().is_empty());
    }

    #[test]
    fn registering_selects_the_new_user() {
        let mut session = Session::new();
        session.register_user(user("Ana"));
        session.register_user(user("Caio"));

        assert_eq!(session.current_user().unwrap().name, "Caio");
    }

    #[test]
    fn select_is_one_based() {
        let mut session = Session::new();
        session.register_user(user("Ana"));
        session.register_user(user("Caio"));

        assert_eq!(session.select_user(1).unwrap().name, "Ana");
        assert_eq!(session.current_user().unwrap().name, "Ana");
    }

    #[test]
    fn out_of_range_keeps_selection() {
        let mut session = Session::new();
        session.register_user(user("Ana"));

        assert!(session.select_user(0).is_none());
        assert!(session.select_user(2).is_none());
        assert_eq!(session.current_user().unwrap().name, "Ana");
    }
}
