/// Statically-declared description of a record type's surface: the ordered
/// constructor parameters, read accessors, and write accessors that the
/// mapper works from. Shapes are plain immutable values; nothing here knows
/// about columns or storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectShape {
    pub type_name: String,
    /// Constructor parameters in declaration order.
    pub params: Vec<Property>,
    /// Read accessors (getters) with their declared return types.
    pub getters: Vec<Property>,
    /// Write accessors (setters) under their raw declared names, which may
    /// carry an assignment marker (e.g. `login=` or `setLogin`).
    pub setters: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub typ: String,
}

impl Property {
    pub fn new(name: &str, typ: &str) -> Self {
        Self {
            name: name.to_string(),
            typ: typ.to_string(),
        }
    }
}

impl ObjectShape {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            params: Vec::new(),
            getters: Vec::new(),
            setters: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, typ: &str) -> Self {
        self.params.push(Property::new(name, typ));
        self
    }

    pub fn getter(mut self, name: &str, typ: &str) -> Self {
        self.getters.push(Property::new(name, typ));
        self
    }

    pub fn setter(mut self, name: &str, typ: &str) -> Self {
        self.setters.push(Property::new(name, typ));
        self
    }

    /// Declared type of a read accessor, if the shape has one by this name.
    pub fn getter_type(&self, name: &str) -> Option<&str> {
        self.getters
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.typ.as_str())
    }
}
