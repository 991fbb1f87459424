use wye::List;
use wye::intersection;

fn main() {
  let mut list = List::new();
  for value in [5, 10, 15, 51, 33, 7] {
    list.push_back(value);
  }
  println!("{}", list);
  println!("{}", list.display_rev());

  let _ = list.remove(&5);
  let _ = list.remove(&15);
  let _ = list.remove(&7);
  println!("{}", list);

  list.reverse();
  println!("{}", list);

  let mut a = List::new();
  for value in [5, 10, 15, 51, 33, 7] {
    a.push_back(value);
  }
  let mut b = List::new();
  for value in [1, 2, 3] {
    b.push_back(value);
  }

  // Share a's suffix from its third node on.
  b.splice(a.node_at(2).unwrap());
  println!("{}", a);
  println!("{}", b);

  match intersection(&a, &b) {
    Some(node) => println!("intersection at {}", node.value()),
    None => println!("no intersection"),
  }
}
