use super::*;

fn individual(fitness: f64) -> Individual<usize> {
    Individual { genome: 0, fitness }
}

fn get_all_fitness(population: &Elitism<usize>) -> Vec<f64> {
    population.ranked().map(|individual| individual.fitness).collect()
}

#[test]
fn can_maintain_best_order() {
    let mut population = Elitism::new(3);

    population.add(individual(6.5));
    assert_eq!(population.size(), 1);
    assert_eq!(population.best().unwrap().fitness, 6.5);

    population.add(individual(10.));
    assert_eq!(population.size(), 2);
    assert_eq!(population.best().unwrap().fitness, 10.);

    population.add(individual(1.));
    population.add(individual(8.));
    assert_eq!(population.size(), 3);
    assert_eq!(get_all_fitness(&population), &[10., 8., 6.5]);
}

#[test]
fn can_check_improvement() {
    let mut population = Elitism::new(4);

    assert_eq!(true, population.add(individual(1.)));
    assert_eq!(false, population.add(individual(1.)));
    assert_eq!(false, population.add(individual(0.5)));
    assert_eq!(true, population.add(individual(2.)));
    assert_eq!(false, population.add_all(vec![individual(0.1), individual(1.5)]));
    assert_eq!(true, population.add_all(vec![individual(0.1), individual(3.)]));
}

#[test]
fn can_retain_best() {
    let mut population = Elitism::new(6);
    population.add_all((0..6).map(|idx| individual(idx as f64)).collect());

    population.retain_best(3);

    assert_eq!(get_all_fitness(&population), &[5., 4., 3.]);
}

#[test]
fn can_keep_insertion_order_on_ties() {
    let mut population = Elitism::new(4);

    population.add(Individual { genome: 1, fitness: 1. });
    population.add(Individual { genome: 2, fitness: 1. });

    let genomes = population.ranked().map(|individual| individual.genome).collect::<Vec<_>>();

    assert_eq!(genomes, &[1, 2]);
}
