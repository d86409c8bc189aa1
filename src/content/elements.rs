//! Static periodic table catalogue.
//!
//! All 118 elements compiled into the binary. This is reference data:
//! read-only, never persisted, keyed by atomic number.

use std::sync::LazyLock;

use crate::domain::{Element, ElementCategory};

use ElementCategory::*;

/// (number, symbol, English name, Turkish name, category, atomic weight)
#[rustfmt::skip]
static RAW: &[(u32, &str, &str, &str, ElementCategory, f64)] = &[
  (1, "H", "Hydrogen", "Hidrojen", Nonmetal, 1.008),
  (2, "He", "Helium", "Helyum", NobleGas, 4.0026),
  (3, "Li", "Lithium", "Lityum", AlkaliMetal, 6.94),
  (4, "Be", "Beryllium", "Berilyum", AlkalineEarthMetal, 9.0122),
  (5, "B", "Boron", "Bor", Metalloid, 10.81),
  (6, "C", "Carbon", "Karbon", Nonmetal, 12.011),
  (7, "N", "Nitrogen", "Azot", Nonmetal, 14.007),
  (8, "O", "Oxygen", "Oksijen", Nonmetal, 15.999),
  (9, "F", "Fluorine", "Flor", Halogen, 18.998),
  (10, "Ne", "Neon", "Neon", NobleGas, 20.180),
  (11, "Na", "Sodium", "Sodyum", AlkaliMetal, 22.990),
  (12, "Mg", "Magnesium", "Magnezyum", AlkalineEarthMetal, 24.305),
  (13, "Al", "Aluminium", "Alüminyum", PostTransitionMetal, 26.982),
  (14, "Si", "Silicon", "Silisyum", Metalloid, 28.085),
  (15, "P", "Phosphorus", "Fosfor", Nonmetal, 30.974),
  (16, "S", "Sulfur", "Kükürt", Nonmetal, 32.06),
  (17, "Cl", "Chlorine", "Klor", Halogen, 35.45),
  (18, "Ar", "Argon", "Argon", NobleGas, 39.948),
  (19, "K", "Potassium", "Potasyum", AlkaliMetal, 39.098),
  (20, "Ca", "Calcium", "Kalsiyum", AlkalineEarthMetal, 40.078),
  (21, "Sc", "Scandium", "Skandiyum", TransitionMetal, 44.956),
  (22, "Ti", "Titanium", "Titanyum", TransitionMetal, 47.867),
  (23, "V", "Vanadium", "Vanadyum", TransitionMetal, 50.942),
  (24, "Cr", "Chromium", "Krom", TransitionMetal, 51.996),
  (25, "Mn", "Manganese", "Mangan", TransitionMetal, 54.938),
  (26, "Fe", "Iron", "Demir", TransitionMetal, 55.845),
  (27, "Co", "Cobalt", "Kobalt", TransitionMetal, 58.933),
  (28, "Ni", "Nickel", "Nikel", TransitionMetal, 58.693),
  (29, "Cu", "Copper", "Bakır", TransitionMetal, 63.546),
  (30, "Zn", "Zinc", "Çinko", TransitionMetal, 65.38),
  (31, "Ga", "Gallium", "Galyum", PostTransitionMetal, 69.723),
  (32, "Ge", "Germanium", "Germanyum", Metalloid, 72.630),
  (33, "As", "Arsenic", "Arsenik", Metalloid, 74.922),
  (34, "Se", "Selenium", "Selenyum", Nonmetal, 78.971),
  (35, "Br", "Bromine", "Brom", Halogen, 79.904),
  (36, "Kr", "Krypton", "Kripton", NobleGas, 83.798),
  (37, "Rb", "Rubidium", "Rubidyum", AlkaliMetal, 85.468),
  (38, "Sr", "Strontium", "Stronsiyum", AlkalineEarthMetal, 87.62),
  (39, "Y", "Yttrium", "İtriyum", TransitionMetal, 88.906),
  (40, "Zr", "Zirconium", "Zirkonyum", TransitionMetal, 91.224),
  (41, "Nb", "Niobium", "Niyobyum", TransitionMetal, 92.906),
  (42, "Mo", "Molybdenum", "Molibden", TransitionMetal, 95.95),
  (43, "Tc", "Technetium", "Teknesyum", TransitionMetal, 98.0),
  (44, "Ru", "Ruthenium", "Rutenyum", TransitionMetal, 101.07),
  (45, "Rh", "Rhodium", "Rodyum", TransitionMetal, 102.91),
  (46, "Pd", "Palladium", "Paladyum", TransitionMetal, 106.42),
  (47, "Ag", "Silver", "Gümüş", TransitionMetal, 107.87),
  (48, "Cd", "Cadmium", "Kadmiyum", TransitionMetal, 112.41),
  (49, "In", "Indium", "İndiyum", PostTransitionMetal, 114.82),
  (50, "Sn", "Tin", "Kalay", PostTransitionMetal, 118.71),
  (51, "Sb", "Antimony", "Antimon", Metalloid, 121.76),
  (52, "Te", "Tellurium", "Tellür", Metalloid, 127.60),
  (53, "I", "Iodine", "İyot", Halogen, 126.90),
  (54, "Xe", "Xenon", "Ksenon", NobleGas, 131.29),
  (55, "Cs", "Caesium", "Sezyum", AlkaliMetal, 132.91),
  (56, "Ba", "Barium", "Baryum", AlkalineEarthMetal, 137.33),
  (57, "La", "Lanthanum", "Lantan", Lanthanide, 138.91),
  (58, "Ce", "Cerium", "Seryum", Lanthanide, 140.12),
  (59, "Pr", "Praseodymium", "Praseodim", Lanthanide, 140.91),
  (60, "Nd", "Neodymium", "Neodim", Lanthanide, 144.24),
  (61, "Pm", "Promethium", "Prometyum", Lanthanide, 145.0),
  (62, "Sm", "Samarium", "Samaryum", Lanthanide, 150.36),
  (63, "Eu", "Europium", "Evropyum", Lanthanide, 151.96),
  (64, "Gd", "Gadolinium", "Gadolinyum", Lanthanide, 157.25),
  (65, "Tb", "Terbium", "Terbiyum", Lanthanide, 158.93),
  (66, "Dy", "Dysprosium", "Disprozyum", Lanthanide, 162.50),
  (67, "Ho", "Holmium", "Holmiyum", Lanthanide, 164.93),
  (68, "Er", "Erbium", "Erbiyum", Lanthanide, 167.26),
  (69, "Tm", "Thulium", "Tulyum", Lanthanide, 168.93),
  (70, "Yb", "Ytterbium", "İterbiyum", Lanthanide, 173.05),
  (71, "Lu", "Lutetium", "Lutesyum", Lanthanide, 174.97),
  (72, "Hf", "Hafnium", "Hafniyum", TransitionMetal, 178.49),
  (73, "Ta", "Tantalum", "Tantal", TransitionMetal, 180.95),
  (74, "W", "Tungsten", "Volfram", TransitionMetal, 183.84),
  (75, "Re", "Rhenium", "Renyum", TransitionMetal, 186.21),
  (76, "Os", "Osmium", "Osmiyum", TransitionMetal, 190.23),
  (77, "Ir", "Iridium", "İridyum", TransitionMetal, 192.22),
  (78, "Pt", "Platinum", "Platin", TransitionMetal, 195.08),
  (79, "Au", "Gold", "Altın", TransitionMetal, 196.97),
  (80, "Hg", "Mercury", "Cıva", TransitionMetal, 200.59),
  (81, "Tl", "Thallium", "Talyum", PostTransitionMetal, 204.38),
  (82, "Pb", "Lead", "Kurşun", PostTransitionMetal, 207.2),
  (83, "Bi", "Bismuth", "Bizmut", PostTransitionMetal, 208.98),
  (84, "Po", "Polonium", "Polonyum", PostTransitionMetal, 209.0),
  (85, "At", "Astatine", "Astatin", Halogen, 210.0),
  (86, "Rn", "Radon", "Radon", NobleGas, 222.0),
  (87, "Fr", "Francium", "Fransiyum", AlkaliMetal, 223.0),
  (88, "Ra", "Radium", "Radyum", AlkalineEarthMetal, 226.0),
  (89, "Ac", "Actinium", "Aktinyum", Actinide, 227.0),
  (90, "Th", "Thorium", "Toryum", Actinide, 232.04),
  (91, "Pa", "Protactinium", "Protaktinyum", Actinide, 231.04),
  (92, "U", "Uranium", "Uranyum", Actinide, 238.03),
  (93, "Np", "Neptunium", "Neptünyum", Actinide, 237.0),
  (94, "Pu", "Plutonium", "Plütonyum", Actinide, 244.0),
  (95, "Am", "Americium", "Amerikyum", Actinide, 243.0),
  (96, "Cm", "Curium", "Küriyum", Actinide, 247.0),
  (97, "Bk", "Berkelium", "Berkelyum", Actinide, 247.0),
  (98, "Cf", "Californium", "Kaliforniyum", Actinide, 251.0),
  (99, "Es", "Einsteinium", "Aynştaynyum", Actinide, 252.0),
  (100, "Fm", "Fermium", "Fermiyum", Actinide, 257.0),
  (101, "Md", "Mendelevium", "Mendelevyum", Actinide, 258.0),
  (102, "No", "Nobelium", "Nobelyum", Actinide, 259.0),
  (103, "Lr", "Lawrencium", "Lavrensiyum", Actinide, 266.0),
  (104, "Rf", "Rutherfordium", "Rutherfordyum", TransitionMetal, 267.0),
  (105, "Db", "Dubnium", "Dubniyum", TransitionMetal, 268.0),
  (106, "Sg", "Seaborgium", "Seaborgiyum", TransitionMetal, 269.0),
  (107, "Bh", "Bohrium", "Bohriyum", TransitionMetal, 270.0),
  (108, "Hs", "Hassium", "Hassiyum", TransitionMetal, 277.0),
  (109, "Mt", "Meitnerium", "Meitneryum", TransitionMetal, 278.0),
  (110, "Ds", "Darmstadtium", "Darmstadtiyum", TransitionMetal, 281.0),
  (111, "Rg", "Roentgenium", "Röntgenyum", TransitionMetal, 282.0),
  (112, "Cn", "Copernicium", "Kopernikyum", TransitionMetal, 285.0),
  (113, "Nh", "Nihonium", "Nihonyum", PostTransitionMetal, 286.0),
  (114, "Fl", "Flerovium", "Flerovyum", PostTransitionMetal, 289.0),
  (115, "Mc", "Moscovium", "Moskovyum", PostTransitionMetal, 290.0),
  (116, "Lv", "Livermorium", "Livermoryum", PostTransitionMetal, 293.0),
  (117, "Ts", "Tennessine", "Tennessin", Halogen, 294.0),
  (118, "Og", "Oganesson", "Oganesson", NobleGas, 294.0),
];

static CATALOGUE: LazyLock<Vec<Element>> = LazyLock::new(|| {
  RAW
    .iter()
    .map(|&(number, symbol, name_en, name_tr, category, atomic_weight)| Element {
      number,
      symbol,
      name_en,
      name_tr,
      category,
      atomic_weight,
    })
    .collect()
});

/// The full element catalogue, ordered by atomic number
pub fn catalogue() -> &'static [Element] {
  &CATALOGUE
}

/// Look up an element by atomic number
pub fn by_number(number: u32) -> Option<&'static Element> {
  // Catalogue is dense and 1-indexed by atomic number
  CATALOGUE.get(number.checked_sub(1)? as usize)
}

/// Look up an element by its symbol (case sensitive, e.g. "He")
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
  CATALOGUE.iter().find(|e| e.symbol == symbol)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_catalogue_size() {
    assert_eq!(catalogue().len(), 118);
  }

  #[test]
  fn test_catalogue_dense_and_ordered() {
    for (i, element) in catalogue().iter().enumerate() {
      assert_eq!(element.number as usize, i + 1);
    }
  }

  #[test]
  fn test_by_number() {
    assert_eq!(by_number(1).unwrap().symbol, "H");
    assert_eq!(by_number(26).unwrap().symbol, "Fe");
    assert_eq!(by_number(118).unwrap().symbol, "Og");
    assert!(by_number(0).is_none());
    assert!(by_number(119).is_none());
  }

  #[test]
  fn test_by_symbol() {
    assert_eq!(by_symbol("Na").unwrap().number, 11);
    assert!(by_symbol("Uuo").is_none());
    assert!(by_symbol("na").is_none()); // case sensitive
  }

  #[test]
  fn test_symbols_unique() {
    let mut symbols: Vec<&str> = catalogue().iter().map(|e| e.symbol).collect();
    symbols.sort();
    symbols.dedup();
    assert_eq!(symbols.len(), 118);
  }

  #[test]
  fn test_localized_element_names() {
    use crate::domain::Language;
    let iron = by_number(26).unwrap();
    assert_eq!(iron.name(Language::En), "Iron");
    assert_eq!(iron.name(Language::Tr), "Demir");
  }
}
