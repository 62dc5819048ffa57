//! Static team roster used to resolve responsible-party display names.

use super::PersonId;

/// Identifiers and display names of the default maintenance team.
const DEFAULT_TEAM: [(&str, &str); 8] = [
    ("u-joao", "João"),
    ("u-maria", "Maria"),
    ("u-carlos", "Carlos"),
    ("u-ana", "Ana"),
    ("u-paulo", "Paulo"),
    ("u-fernanda", "Fernanda"),
    ("u-lucas", "Lucas"),
    ("u-roberto", "Roberto"),
];

/// A person who can be made responsible for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
}

impl Person {
    /// Creates a roster entry.
    #[must_use]
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the person identifier.
    #[must_use]
    pub const fn id(&self) -> &PersonId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Read-only directory of people, in dropdown order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Creates a roster from the given people.
    #[must_use]
    pub fn new(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            people: people.into_iter().collect(),
        }
    }

    /// Returns the default eight-person team.
    #[must_use]
    pub fn default_team() -> Self {
        Self::new(DEFAULT_TEAM.iter().filter_map(|(id, name)| {
            PersonId::new(*id).map(|person_id| Person::new(person_id, *name))
        }))
    }

    /// Returns every person in roster order.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Looks up a person by identifier.
    #[must_use]
    pub fn find(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id() == id)
    }

    /// Resolves the display name for an identifier.
    ///
    /// Unknown identifiers resolve to an empty name.
    #[must_use]
    pub fn display_name(&self, id: &PersonId) -> String {
        self.find(id)
            .map(|person| person.name().to_owned())
            .unwrap_or_default()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::default_team()
    }
}
