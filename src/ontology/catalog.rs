//! Static candidate lists the generators draw labels from.

pub const NAMES: &[&str] = &[
    "Lucia", "Martina", "Sofia", "Maria", "Julia", "Paula", "Valeria", "Emma", "Daniela",
    "Carla", "Alba", "Noa", "Hugo", "Mateo", "Martin", "Lucas", "Leo", "Daniel", "Alejandro",
    "Manuel", "Pablo", "Alvaro", "Adrian", "Mario", "Diego", "Javier", "Carmen", "Elena",
    "Ines", "Jorge",
];

pub const LAST_NAMES: &[&str] = &[
    "Garcia", "Rodriguez", "Gonzalez", "Fernandez", "Lopez", "Martinez", "Sanchez", "Perez",
    "Gomez", "Martin", "Jimenez", "Ruiz", "Hernandez", "Diaz", "Moreno", "Munoz", "Alvarez",
    "Romero", "Alonso", "Gutierrez", "Navarro", "Torres", "Dominguez", "Vazquez", "Ramos",
    "Gil", "Ramirez", "Serrano", "Blanco", "Molina",
];

/// Starters (`Primero`).
pub const ENTRY_FOOD: &[&str] = &[
    "Gazpacho",
    "Salmorejo",
    "Ensalada mixta",
    "Sopa de ajo",
    "Crema de calabacin",
    "Croquetas de jamon",
    "Pimientos de padron",
    "Ensaladilla rusa",
    "Esparragos trigueros",
    "Caldo gallego",
];

/// Main dishes (`Segundo`).
pub const PRINCIPAL_FOOD: &[&str] = &[
    "Paella valenciana",
    "Cocido madrileno",
    "Fabada asturiana",
    "Merluza a la vasca",
    "Bacalao al pil pil",
    "Rabo de toro",
    "Cordero asado",
    "Pulpo a la gallega",
    "Secreto iberico",
    "Calamares en su tinta",
];

/// Desserts (`Postre`).
pub const DESERTS: &[&str] = &[
    "Flan de huevo",
    "Crema catalana",
    "Arroz con leche",
    "Natillas",
    "Tarta de Santiago",
    "Torrijas",
    "Tarta de queso",
    "Churros con chocolate",
    "Leche frita",
    "Tocino de cielo",
];

/// Low calorie dishes (`Hipocalorica`).
pub const FIT_FOOD: &[&str] = &[
    "Ensalada de quinoa",
    "Pechuga a la plancha",
    "Dorada al horno",
    "Verduras al vapor",
    "Tortilla de claras",
    "Lubina a la sal",
    "Ensalada de espinacas",
    "Salteado de tofu",
    "Brocheta de pavo",
    "Crema de puerros",
];

/// Vegetarian dishes (`Vegetariana`).
pub const VEGETARIAN_FOOD: &[&str] = &[
    "Tortilla de patatas",
    "Pisto manchego",
    "Escalivada",
    "Menestra de verduras",
    "Berenjenas rellenas",
    "Patatas bravas",
    "Champinones al ajillo",
    "Garbanzos con espinacas",
    "Lentejas estofadas",
    "Pimientos del piquillo rellenos de queso",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_populated() {
        for list in [
            NAMES,
            LAST_NAMES,
            ENTRY_FOOD,
            PRINCIPAL_FOOD,
            DESERTS,
            FIT_FOOD,
            VEGETARIAN_FOOD,
        ] {
            assert!(!list.is_empty());
        }
    }
}
