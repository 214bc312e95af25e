//! Struct declarations.

use std::sync::Arc;

use gopoet_core::{
    CodeBlock, ImportRegistry, ImportSet, Pointer, Statement, TypeReference, Value, attach,
    attach_imports, statement,
};

use crate::{Comment, FuncSpec, MethodSpec};

/// A struct field. An empty name makes it an embedded field.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: Arc<dyn TypeReference>,
    pub tag: Option<String>,
}

/// A struct declaration with its attached methods.
///
/// Attached methods are rendered right after the struct, each separated from
/// its neighbours by one blank line.
///
/// # Example
///
/// ```
/// use gopoet::{StructSpec, types};
/// use gopoet_core::{CodeBlock, statement};
///
/// let user = StructSpec::new("User")
///     .field("Name", types::string())
///     .field_with_tag("Age", types::int(), r#"json:"age""#);
/// let greet = user
///     .method("Greet", "u", false)
///     .result("", types::string())
///     .statement(statement!("return $L", "u.Name"));
/// let user = user.attach_method(greet);
///
/// assert_eq!(
///     user.render().unwrap(),
///     "type User struct {\n\tName string\n\tAge int `json:\"age\"`\n}\n\nfunc (u User) Greet() string {\n\treturn u.Name\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StructSpec {
    pub name: String,
    pub comment: Comment,
    pub fields: Vec<Field>,
    pub methods: Vec<MethodSpec>,
}

impl StructSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: Comment::default(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the doc comment.
    pub fn comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Add a named field.
    pub fn field(mut self, name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty: Arc::new(ty),
            tag: None,
        });
        self
    }

    /// Add a field with a struct tag (written between backquotes).
    pub fn field_with_tag(
        mut self,
        name: impl Into<String>,
        ty: impl TypeReference + 'static,
        tag: impl Into<String>,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty: Arc::new(ty),
            tag: Some(tag.into()),
        });
        self
    }

    /// Add an embedded field.
    pub fn embed(self, ty: impl TypeReference + 'static) -> Self {
        self.field("", ty)
    }

    /// Start a method with this struct (or a pointer to it) as the receiver.
    ///
    /// The method is not attached; pass it to [`StructSpec::attach_method`].
    pub fn method(
        &self,
        name: impl Into<String>,
        receiver_name: impl Into<String>,
        receiver_is_ptr: bool,
    ) -> MethodSpec {
        MethodSpec::from_function(
            FuncSpec::new(name),
            receiver_name,
            self.receiver(receiver_is_ptr),
        )
    }

    /// Turn `func` into a method with this struct (or a pointer to it) as the receiver.
    pub fn method_from_function(
        &self,
        receiver_name: impl Into<String>,
        receiver_is_ptr: bool,
        func: FuncSpec,
    ) -> MethodSpec {
        MethodSpec::from_function(func, receiver_name, self.receiver(receiver_is_ptr))
    }

    /// Render `method` next to this struct.
    pub fn attach_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// A pointer to this struct.
    pub fn as_pointer(&self) -> Pointer {
        Pointer::new(LocalType(self.name.clone()))
    }

    fn receiver(&self, is_ptr: bool) -> Arc<dyn TypeReference> {
        if is_ptr {
            Arc::new(self.as_pointer())
        } else {
            Arc::new(LocalType(self.name.clone()))
        }
    }

    fn declaration(&self) -> Vec<Statement> {
        let mut statements = self.comment.statements();
        if self.fields.is_empty() {
            statements.push(statement!("type $L struct{}", self.name.as_str()));
            return statements;
        }

        statements.push(statement!("type $L struct {", self.name.as_str()).indent_after(1));
        for field in &self.fields {
            let mut template = String::new();
            let mut args = Vec::with_capacity(3);
            if !field.name.is_empty() {
                template.push_str("$L ");
                args.push(Value::from(field.name.as_str()));
            }
            template.push_str("$T");
            args.push(Value::Type(Arc::clone(&field.ty)));
            if let Some(tag) = &field.tag {
                template.push_str(" `$L`");
                args.push(Value::from(tag.as_str()));
            }
            statements.push(Statement::with_args(template, args));
        }
        statements.push(Statement::close("}"));
        statements
    }
}

/// The bare name of a type declared in the unit being rendered.
#[derive(Debug, Clone)]
struct LocalType(String);

impl TypeReference for LocalType {
    fn type_name(&self, _registry: &ImportRegistry) -> String {
        self.0.clone()
    }

    fn type_imports(&self) -> ImportSet {
        ImportSet::new()
    }
}

impl TypeReference for StructSpec {
    fn type_name(&self, _registry: &ImportRegistry) -> String {
        self.name.clone()
    }

    fn type_imports(&self) -> ImportSet {
        ImportSet::new()
    }
}

impl CodeBlock for StructSpec {
    fn statements(&self) -> Vec<Statement> {
        attach(self.declaration(), &self.methods)
    }

    fn imports(&self) -> ImportSet {
        let fields = self
            .fields
            .iter()
            .flat_map(|field| field.ty.type_imports())
            .collect();
        attach_imports(fields, &self.methods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeName, types};

    #[test]
    fn test_fieldless_struct() {
        let spec = StructSpec::new("Marker");
        assert_eq!(spec.render().unwrap(), "type Marker struct{}\n");
    }

    #[test]
    fn test_fieldless_struct_with_method() {
        let spec = StructSpec::new("Marker");
        let method = spec.method("Mark", "m", true);
        let spec = spec.attach_method(method);
        assert_eq!(
            spec.render().unwrap(),
            "type Marker struct{}\n\nfunc (m *Marker) Mark() {\n}\n"
        );
    }

    #[test]
    fn test_methods_separated_by_one_blank() {
        let spec = StructSpec::new("T").field("n", types::int());
        let a = spec.method("A", "t", false);
        let b = spec.method("B", "t", true);
        let spec = spec.attach_method(a).attach_method(b);

        let statements = spec.statements();
        let blanks = statements.iter().filter(|s| s.is_blank()).count();
        assert_eq!(blanks, 2);
        assert!(!statements.last().unwrap().is_blank());
    }

    #[test]
    fn test_embedded_field_and_imports() {
        let spec = StructSpec::new("Server")
            .embed(TypeName::qualified("sync", "Mutex").unwrap())
            .field("Timeout", TypeName::qualified("time", "Duration").unwrap())
            .field("Started", TypeName::qualified("time", "Time").unwrap());

        assert_eq!(
            spec.render().unwrap(),
            "type Server struct {\n\tsync.Mutex\n\tTimeout time.Duration\n\tStarted time.Time\n}\n"
        );
        let imports = spec.imports();
        assert_eq!(imports.len(), 2);
        assert!(imports.contains("sync"));
        assert!(imports.contains("time"));
    }

    #[test]
    fn test_method_imports_are_merged() {
        let spec = StructSpec::new("Job");
        let run = spec
            .method("Run", "j", true)
            .param("ctx", TypeName::qualified("context", "Context").unwrap());
        let spec = spec.attach_method(run);
        assert!(spec.imports().contains("context"));
    }

    #[test]
    fn test_struct_as_type_reference() {
        let spec = StructSpec::new("Point");
        let registry = ImportRegistry::new();
        assert_eq!(spec.type_name(&registry), "Point");
        assert_eq!(spec.as_pointer().type_name(&registry), "*Point");
        assert!(spec.as_pointer().type_imports().is_empty());
    }
}
