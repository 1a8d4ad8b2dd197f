// ClipRing - Module clipboard
// Interface entre le ring et l'application hote
//
// Ce module fournit deux sous-modules complementaires :
// - `monitor` : recoit les evenements de copie de l'hote et les
//   transmet au ring (texte absent ou vide ignore).
// - `toolbox` : expose chaque entree du ring a la boite a outils de
//   l'hote (nom, apercu, filtre, glisser-deposer, insertion au curseur).
//
// Architecture :
// Le rendu, les icones et l'acces au presse-papiers systeme restent
// cote hote. Ce module ne contient que les points de jonction.

/// Reception des evenements de copie.
pub mod monitor;
/// Adaptation des entrees a la boite a outils de l'hote.
pub mod toolbox;
