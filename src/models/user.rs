// ============================================================================
// USER MODEL - Usuario autenticado
// ============================================================================

use serde::{Deserialize, Serialize};

/// Usuario autenticado. Solo importa su presencia/ausencia para el guard
/// del dashboard; el resto de campos se muestran tal cual.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// ID único del usuario
    pub id: String,

    /// Nombre visible (puede no estar configurado todavía)
    pub name: Option<String>,

    /// Email de la cuenta
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsea_usuario_sin_nombre() {
        let json = r#"{"id":"u1","name":null,"email":"ana@acme.test"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.name.is_none());
    }
}
